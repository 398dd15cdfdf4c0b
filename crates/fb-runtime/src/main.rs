//! # Fedblock Engine
//!
//! Starts the blocklist engine with configuration from the environment
//! (see `container::config` for the variables) and runs until Ctrl+C.
//!
//! Log filtering follows `FB_LOG` (`EnvFilter` syntax, default `info`).

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fb_runtime::{EngineConfig, EngineRuntime};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FB_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = EngineConfig::from_env().context("Failed to load engine configuration")?;

    let runtime = EngineRuntime::new(config).context("Failed to initialize engine")?;
    runtime.start().await?;

    info!("Engine is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await;

    Ok(())
}
