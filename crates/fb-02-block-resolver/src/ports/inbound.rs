//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::{AccountId, EffectiveBlockSet, Viewer};

use crate::error::ResolveError;

/// Computes the block set that applies to one request.
#[async_trait]
pub trait BlockSetResolver: Send + Sync {
    /// Instance-scope blocks, plus the viewer's own account-scope blocks
    /// when the viewer is authenticated.
    async fn resolve(&self, viewer: &Viewer) -> Result<EffectiveBlockSet, ResolveError>;

    /// Resolves as if `account` were the viewer.
    async fn resolve_for_account(
        &self,
        account: &AccountId,
    ) -> Result<EffectiveBlockSet, ResolveError>;
}
