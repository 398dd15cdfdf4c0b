//! # Fedblock Runtime
//!
//! Wires the blocklist subsystems into one engine and runs the notification
//! worker. The `fb-runtime` binary is a thin shell around [`EngineRuntime`].
//!
//! ## Flow
//!
//! ```text
//!  management calls ──→ fb-01 Block Registry
//!                               │ entries
//!                               ↓
//!                       fb-02 Resolver ──→ EffectiveBlockSet (per request)
//!                          │          │
//!                          ↓          ↓
//!        fb-03 Visibility Filter    fb-04 Notification Gate
//!        (videos, comment threads)  (CommentCreated jobs from the queue)
//! ```
//!
//! ## Modular Structure
//!
//! - `container/` - configuration and the subsystem container
//! - `adapters/` - port implementations connecting subsystems

pub mod adapters;
pub mod container;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use fb_01_block_registry::{SystemTimeSource, TimeSource};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info};

pub use container::{ConfigError, EngineConfig, EngineContainer};

/// The engine runtime: a container plus the background notification worker.
pub struct EngineRuntime<T: TimeSource + 'static = SystemTimeSource> {
    container: Arc<EngineContainer<T>>,
    started: AtomicBool,
    /// Notification worker task, present while running.
    worker: Mutex<Option<JoinHandle<()>>>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver.
    shutdown_rx: watch::Receiver<bool>,
}

impl EngineRuntime<SystemTimeSource> {
    /// Create a runtime from configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_container(EngineContainer::new(config)?))
    }
}

impl<T: TimeSource + 'static> EngineRuntime<T> {
    pub fn from_container(container: EngineContainer<T>) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            container: Arc::new(container),
            started: AtomicBool::new(false),
            worker: Mutex::new(None),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Start the notification worker.
    ///
    /// Jobs submitted before this call wait in the queue and are processed
    /// once the worker runs.
    pub async fn start(&self) -> Result<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            bail!("engine runtime already started");
        }

        info!("===========================================");
        info!("  Fedblock Engine v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let worker = Arc::clone(&self.container.gate_worker).spawn(self.shutdown_rx.clone());
        *self.worker.lock().await = Some(worker);

        let config = &self.container.config;
        info!("Local host: {}", config.instance.local_host);
        info!("Instance account: {}", config.instance.instance_account);
        info!("Max page size: {}", config.registry.max_page_size);
        info!("Bus capacity: {}", config.bus.channel_capacity);
        info!("Job queue capacity: {}", config.bus.job_queue_capacity);

        Ok(())
    }

    /// Stop the notification worker.
    ///
    /// New jobs are refused; jobs already queued are processed before this
    /// returns.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
        if let Some(worker) = self.worker.lock().await.take() {
            if let Err(e) = worker.await {
                error!("Notification worker ended abnormally: {}", e);
            }
        }

        info!("Shutdown complete");
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Get a reference to the subsystem container.
    pub fn container(&self) -> Arc<EngineContainer<T>> {
        Arc::clone(&self.container)
    }
}
