//! Outbound Ports (Driven Ports)

use async_trait::async_trait;
use shared_types::{EffectiveBlockSet, Viewer};

use crate::error::VisibilityError;

/// Source of per-request block sets (the resolver, wired by the runtime).
#[async_trait]
pub trait BlockSetProvider: Send + Sync {
    async fn block_set(&self, viewer: &Viewer) -> Result<EffectiveBlockSet, VisibilityError>;
}
