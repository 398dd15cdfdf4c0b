//! Ports Layer
//!
//! - Driving Ports (inbound) - `NotificationGateApi`
//! - Driven Ports (outbound) - block sets, notification sink, recipients

pub mod inbound;
pub mod outbound;

pub use inbound::{NotificationGateApi, PipelineOutcome};
pub use outbound::{BlockSetProvider, NotificationSink, RecipientDirectory};
