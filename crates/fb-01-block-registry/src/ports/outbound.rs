//! Outbound Ports (Driven Ports)
//!
//! Storage, identity lookup and clock the registry depends on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{AccountId, BlockEntry, BlockScope, BlockTarget, Host, Timestamp};

use crate::error::RegistryResult;

/// A block about to be stored; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBlock {
    pub blocking_actor: AccountId,
    pub target: BlockTarget,
    pub scope: BlockScope,
    pub created_at: Timestamp,
}

/// Outcome of an insert-if-absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(BlockEntry),
    /// An entry with the same `(actor, target, scope)` already existed.
    Existing(BlockEntry),
}

impl InsertOutcome {
    pub fn into_entry(self) -> BlockEntry {
        match self {
            Self::Inserted(entry) | Self::Existing(entry) => entry,
        }
    }
}

/// Block persistence (Driven Port)
///
/// Implementations must make `insert_if_absent` atomic so that racing
/// duplicate adds converge to a single stored entry.
#[async_trait]
pub trait BlockStore: Send + Sync {
    async fn insert_if_absent(&self, block: NewBlock) -> RegistryResult<InsertOutcome>;

    /// Removes and returns the matching entry, if any.
    async fn remove(
        &self,
        actor: &AccountId,
        target: &BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<Option<BlockEntry>>;

    /// Entries in `scope`, restricted to one actor when given. Unordered.
    async fn select(
        &self,
        scope: BlockScope,
        actor: Option<&AccountId>,
    ) -> RegistryResult<Vec<BlockEntry>>;
}

/// What the directory knows about an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: AccountId,
    pub display_name: String,
}

/// Local and federated identity lookup (Driven Port)
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Profile of a known account, `None` when it cannot be resolved.
    async fn lookup_account(&self, account: &AccountId) -> RegistryResult<Option<AccountProfile>>;

    /// Whether the instance has ever federated with `host`.
    async fn knows_host(&self, host: &Host) -> RegistryResult<bool>;
}

/// Time source abstraction (Driven Port)
pub trait TimeSource: Send + Sync {
    /// Current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as Timestamp)
            .unwrap_or(0)
    }
}
