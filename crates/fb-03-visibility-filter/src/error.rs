//! Error types for the Visibility Filter subsystem
//!
//! Filtering itself cannot fail; only obtaining the block set can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisibilityError {
    #[error("Block set unavailable: {0}")]
    BlockSetUnavailable(String),
}
