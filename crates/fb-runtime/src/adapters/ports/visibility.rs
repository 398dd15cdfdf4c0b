//! # Visibility Filter Port Adapters
//!
//! Implements the outbound port required by fb-03-visibility-filter.
//!
//! ## Ports Implemented
//!
//! - `BlockSetProvider` - the viewer's effective block set, resolved by fb-02
//!   on every request

use std::sync::Arc;

use async_trait::async_trait;
use fb_02_block_resolver::BlockSetResolver;
use fb_03_visibility_filter::{BlockSetProvider, VisibilityError};
use shared_types::{EffectiveBlockSet, Viewer};

/// Hands the resolver's output to the read-path filters and the gate.
pub struct ResolverBlockSets<R: BlockSetResolver> {
    resolver: Arc<R>,
}

impl<R: BlockSetResolver> ResolverBlockSets<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        Self { resolver }
    }

    pub(crate) fn resolver(&self) -> &R {
        &self.resolver
    }
}

#[async_trait]
impl<R: BlockSetResolver> BlockSetProvider for ResolverBlockSets<R> {
    async fn block_set(&self, viewer: &Viewer) -> Result<EffectiveBlockSet, VisibilityError> {
        self.resolver
            .resolve(viewer)
            .await
            .map_err(|e| VisibilityError::BlockSetUnavailable(e.to_string()))
    }
}
