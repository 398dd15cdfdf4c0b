//! Outbound Ports (Driven Ports)
//!
//! Read access to the blocklists. Implemented in the runtime over the
//! block registry; the resolver never depends on the registry crate.

use async_trait::async_trait;
use shared_types::{AccountId, BlockEntry};

use crate::error::ResolveError;

#[async_trait]
pub trait BlockListProvider: Send + Sync {
    /// Every instance-scope entry.
    async fn instance_entries(&self) -> Result<Vec<BlockEntry>, ResolveError>;

    /// Account-scope entries recorded by `owner`.
    async fn account_entries(&self, owner: &AccountId) -> Result<Vec<BlockEntry>, ResolveError>;
}
