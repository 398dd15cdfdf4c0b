//! Error types for the Block Resolver subsystem

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The blocklist source could not be read.
    #[error("Block source unavailable: {0}")]
    SourceUnavailable(String),
}
