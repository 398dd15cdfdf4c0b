//! Inbound Ports (Driving Ports)
//!
//! The API other components use to manage and read blocklists.

use async_trait::async_trait;
use shared_types::{AccountId, BlockEntry, BlockScope, BlockTarget, Page};

use crate::domain::ListQuery;
use crate::error::RegistryResult;

/// Primary Block Registry API (Driving Port)
#[async_trait]
pub trait BlockRegistryApi: Send + Sync {
    /// Record that `blocking_actor` blocks `target` in `scope`.
    ///
    /// Idempotent: an equivalent existing entry is returned unchanged.
    async fn add_block(
        &self,
        blocking_actor: &AccountId,
        target: BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<BlockEntry>;

    /// Delete the matching entry, `NotFound` when there is none.
    async fn remove_block(
        &self,
        blocking_actor: &AccountId,
        target: &BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<()>;

    /// One page of the actor's blocklist in `scope`.
    async fn list_blocks(
        &self,
        blocking_actor: &AccountId,
        scope: BlockScope,
        query: ListQuery,
    ) -> RegistryResult<Page<BlockEntry>>;

    /// Every entry in `scope`, whoever recorded it.
    async fn entries_in_scope(&self, scope: BlockScope) -> RegistryResult<Vec<BlockEntry>>;

    /// Every entry recorded by `actor` in `scope`.
    async fn entries_of(
        &self,
        actor: &AccountId,
        scope: BlockScope,
    ) -> RegistryResult<Vec<BlockEntry>>;
}
