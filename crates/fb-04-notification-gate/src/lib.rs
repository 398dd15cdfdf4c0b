//! # FB-04 Notification Gate
//!
//! Generates comment notifications inside federation jobs and drops those
//! whose origin is blocked for the recipient, before anything is persisted.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `NotificationPlanner`: owner and mention candidates for a comment
//!   - `NotificationGate`: the suppression decision
//!   - `extract_mentions`: `@name` / `@name@host` parsing
//!
//! - **Ports Layer** (`ports/`)
//!   - `NotificationGateApi`: Driving port
//!   - `BlockSetProvider`, `NotificationSink`, `RecipientDirectory`: Driven ports
//!
//! - **Service Layer** (`service`): `NotificationPipeline`
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `NotificationGateBusAdapter`: job queue worker, outcomes on the bus
//!   - `InMemoryNotificationSink`: persistence and feed
//!
//! ## Invariants
//!
//! - The gate decision precedes any sink write.
//! - A suppressed notification is never written, and unblocking later
//!   does not bring it back.
//! - A mention is judged with the mentioned account's block set only.
//!
//! ## Wiring to Runtime
//!
//! ```ignore
//! let pipeline = Arc::new(NotificationPipeline::new(local_host, block_sets, sink, directory));
//! let (jobs, receiver) = shared_bus::job_queue(capacity);
//! let adapter = Arc::new(NotificationGateBusAdapter::new(bus.clone(), pipeline, receiver));
//! let worker = adapter.spawn(shutdown_rx);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryNotificationSink, NotificationGateBusAdapter};
pub use domain::{extract_mentions, NotificationCandidate, NotificationGate, NotificationPlanner};
pub use error::GateError;
pub use metrics::{GateMetrics, GateMetricsSnapshot};
pub use ports::{
    BlockSetProvider, NotificationGateApi, NotificationSink, PipelineOutcome, RecipientDirectory,
};
pub use service::NotificationPipeline;
