//! Adapters Layer
//!
//! - `NotificationGateBusAdapter` - consumes comment jobs from the job queue
//! - `InMemoryNotificationSink` - notification persistence and feed

pub mod bus_adapter;
pub mod memory_sink;

pub use bus_adapter::NotificationGateBusAdapter;
pub use memory_sink::InMemoryNotificationSink;
