//! # Error Types
//!
//! Errors raised while parsing identifiers shared across subsystems.

use thiserror::Error;

/// Errors produced when an account name or host cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The input was empty after trimming.
    #[error("Identifier is empty")]
    Empty,

    /// The account name contains forbidden characters or is too long.
    #[error("Invalid account name: {0}")]
    InvalidName(String),

    /// The host is not a valid server authority.
    #[error("Invalid host: {0}")]
    InvalidHost(String),
}
