//! Error types for the Block Registry subsystem

use shared_types::{AccountId, BlockScope, BlockTarget, IdentifierError};
use thiserror::Error;

/// Errors that can occur while managing blocklists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown target: {0}")]
    UnknownTarget(BlockTarget),

    #[error("No {scope:?} block by {actor} on {target}")]
    NotFound {
        actor: AccountId,
        target: BlockTarget,
        scope: BlockScope,
    },

    #[error("Invalid target {target}: {reason}")]
    InvalidTarget {
        target: BlockTarget,
        reason: &'static str,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
