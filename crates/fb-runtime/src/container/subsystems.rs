//! # Engine Container
//!
//! Holds every subsystem instance and the shared infrastructure.
//!
//! ## Initialization Order
//!
//! ```text
//! Phase 1: Event bus, job queue, block store, identity directory
//! Phase 2: fb-01 Block Registry (+ management handler)
//! Phase 3: fb-02 Effective Block Set Resolver (reads fb-01)
//! Phase 4: fb-03 Visibility Service, fb-04 Notification Pipeline (read fb-02)
//! ```
//!
//! The notification worker is not started here; see `EngineRuntime::start`.

use std::sync::Arc;

use fb_01_block_registry::{
    BlockRegistryService, BlocklistHandler, InMemoryBlockStore, InMemoryIdentityDirectory,
    SystemTimeSource, TimeSource,
};
use fb_02_block_resolver::EffectiveBlockSetResolver;
use fb_03_visibility_filter::VisibilityService;
use fb_04_notification_gate::{
    InMemoryNotificationSink, NotificationGateBusAdapter, NotificationPipeline,
};
use shared_bus::{job_queue, FederationJob, InMemoryEventBus, JobSender, QueueError};
use shared_types::CommentActivity;
use tracing::{info, instrument};

use crate::adapters::{DirectoryRecipients, RegistryBlockLists, ResolverBlockSets};
use crate::container::config::{ConfigError, EngineConfig};

pub type ConcreteRegistry<T> =
    BlockRegistryService<InMemoryBlockStore, InMemoryIdentityDirectory, T>;

pub type ConcreteHandler<T> = BlocklistHandler<ConcreteRegistry<T>, InMemoryIdentityDirectory>;

pub type ConcreteResolver<T> = EffectiveBlockSetResolver<RegistryBlockLists<ConcreteRegistry<T>>>;

pub type ConcreteBlockSets<T> = ResolverBlockSets<ConcreteResolver<T>>;

pub type ConcreteVisibility<T> = VisibilityService<ConcreteBlockSets<T>>;

pub type ConcretePipeline<T> = NotificationPipeline<
    ConcreteBlockSets<T>,
    InMemoryNotificationSink,
    DirectoryRecipients<InMemoryIdentityDirectory>,
>;

pub type ConcreteGateWorker<T> = NotificationGateBusAdapter<ConcretePipeline<T>>;

/// Central container holding all subsystem instances.
pub struct EngineContainer<T: TimeSource + 'static = SystemTimeSource> {
    // =========================================================================
    // SHARED INFRASTRUCTURE
    // =========================================================================
    /// Outcomes of the notification worker.
    pub event_bus: Arc<InMemoryEventBus>,

    /// Bounded queue of comment jobs for the notification worker.
    pub jobs: JobSender,

    /// Accounts and hosts the instance knows about.
    pub directory: Arc<InMemoryIdentityDirectory>,

    // =========================================================================
    // SUBSYSTEMS
    // =========================================================================
    /// Block Registry (fb-01)
    pub registry: Arc<ConcreteRegistry<T>>,

    /// Management surface over the registry.
    pub blocklists: Arc<ConcreteHandler<T>>,

    /// Effective Block Set Resolver (fb-02)
    pub resolver: Arc<ConcreteResolver<T>>,

    /// Visibility Filter read path (fb-03)
    pub visibility: Arc<ConcreteVisibility<T>>,

    /// Notification Gate pipeline (fb-04)
    pub notifications: Arc<ConcretePipeline<T>>,

    /// Persisted notifications and the per-recipient feed.
    pub notification_sink: Arc<InMemoryNotificationSink>,

    /// Worker running the pipeline for each queued comment job.
    pub gate_worker: Arc<ConcreteGateWorker<T>>,

    /// Engine configuration (immutable after initialization).
    pub config: EngineConfig,
}

impl EngineContainer<SystemTimeSource> {
    /// Create a container stamping block entries with wall-clock time.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemTimeSource))
    }
}

impl<T: TimeSource + 'static> EngineContainer<T> {
    #[instrument(name = "engine_init", skip(config, clock))]
    pub fn with_clock(config: EngineConfig, clock: Arc<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(local_host = %config.instance.local_host, "Initializing Fedblock engine container");

        // =====================================================================
        // PHASE 1: Shared Infrastructure
        // =====================================================================
        let event_bus = Arc::new(InMemoryEventBus::with_capacity(config.bus.channel_capacity));
        let (jobs, job_receiver) = job_queue(config.bus.job_queue_capacity);
        let directory = Arc::new(InMemoryIdentityDirectory::new());
        // The instance account exists on every install.
        directory.register(config.instance.instance_account.clone());

        // =====================================================================
        // PHASE 2: Block Registry
        // =====================================================================
        let registry_config = config.registry_config();
        let registry = Arc::new(BlockRegistryService::new(
            Arc::new(InMemoryBlockStore::new()),
            Arc::clone(&directory),
            clock,
            registry_config.clone(),
        )?);
        let blocklists = Arc::new(BlocklistHandler::new(
            Arc::clone(&registry),
            Arc::clone(&directory),
            &registry_config,
        ));
        info!("  [fb-01] Block Registry initialized");

        // =====================================================================
        // PHASE 3: Resolver
        // =====================================================================
        let resolver = Arc::new(EffectiveBlockSetResolver::new(Arc::new(
            RegistryBlockLists::new(Arc::clone(&registry)),
        )));
        info!("  [fb-02] Effective Block Set Resolver initialized");

        // =====================================================================
        // PHASE 4: Consumers of the resolver
        // =====================================================================
        let block_sets = Arc::new(ResolverBlockSets::new(Arc::clone(&resolver)));
        let visibility = Arc::new(VisibilityService::new(
            config.instance.local_host.clone(),
            Arc::clone(&block_sets),
        ));
        info!("  [fb-03] Visibility Filter initialized");

        let notification_sink = Arc::new(InMemoryNotificationSink::new());
        let notifications = Arc::new(NotificationPipeline::new(
            config.instance.local_host.clone(),
            block_sets,
            Arc::clone(&notification_sink),
            Arc::new(DirectoryRecipients::new(Arc::clone(&directory))),
        ));
        let gate_worker = Arc::new(NotificationGateBusAdapter::new(
            Arc::clone(&event_bus),
            Arc::clone(&notifications),
            job_receiver,
        ));
        info!("  [fb-04] Notification Gate initialized");

        Ok(Self {
            event_bus,
            jobs,
            directory,
            registry,
            blocklists,
            resolver,
            visibility,
            notifications,
            notification_sink,
            gate_worker,
            config,
        })
    }

    /// Enqueue a comment job for the notification worker.
    ///
    /// Waits while the queue is full. Fails once the runtime has shut down.
    pub async fn submit_comment(&self, activity: CommentActivity) -> Result<(), QueueError> {
        self.jobs.submit(FederationJob::CommentCreated(activity)).await
    }
}
