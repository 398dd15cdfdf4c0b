//! # Block Resolver Port Adapters
//!
//! Implements the outbound port required by fb-02-block-resolver.
//!
//! ## Ports Implemented
//!
//! - `BlockListProvider` - instance-scope and per-account entries from fb-01

use std::sync::Arc;

use async_trait::async_trait;
use fb_01_block_registry::{BlockRegistryApi, RegistryError};
use fb_02_block_resolver::{BlockListProvider, ResolveError};
use shared_types::{AccountId, BlockEntry, BlockScope};

/// Reads both registries of fb-01 on behalf of the resolver.
pub struct RegistryBlockLists<R: BlockRegistryApi> {
    registry: Arc<R>,
}

impl<R: BlockRegistryApi> RegistryBlockLists<R> {
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

fn unavailable(err: RegistryError) -> ResolveError {
    ResolveError::SourceUnavailable(err.to_string())
}

#[async_trait]
impl<R: BlockRegistryApi> BlockListProvider for RegistryBlockLists<R> {
    async fn instance_entries(&self) -> Result<Vec<BlockEntry>, ResolveError> {
        self.registry
            .entries_in_scope(BlockScope::Instance)
            .await
            .map_err(unavailable)
    }

    async fn account_entries(&self, owner: &AccountId) -> Result<Vec<BlockEntry>, ResolveError> {
        self.registry
            .entries_of(owner, BlockScope::Account)
            .await
            .map_err(unavailable)
    }
}
