//! Outbound Ports (Driven Ports)

use async_trait::async_trait;
use shared_types::{AccountId, EffectiveBlockSet, Notification};

use crate::error::GateError;

/// Per-recipient block sets (the resolver, wired by the runtime).
#[async_trait]
pub trait BlockSetProvider: Send + Sync {
    async fn block_set_for(&self, recipient: &AccountId) -> Result<EffectiveBlockSet, GateError>;
}

/// Notification persistence.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn persist(&self, notifications: Vec<Notification>) -> Result<(), GateError>;
}

/// Lookup of accounts that can receive notifications.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    /// Whether `account` is a known account on this instance.
    async fn is_local_account(&self, account: &AccountId) -> Result<bool, GateError>;
}
