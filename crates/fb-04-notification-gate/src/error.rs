//! Error types for the Notification Gate subsystem

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// A recipient's block set could not be resolved.
    #[error("Block set resolution failed: {0}")]
    Resolve(String),

    #[error("Notification sink error: {0}")]
    Sink(String),

    #[error("Recipient directory error: {0}")]
    Directory(String),
}
