//! Effective Block Set Resolver
//!
//! Union of the instance-scope list and, for an authenticated viewer, that
//! viewer's own account-scope list. There is no precedence between the two
//! and no allow-list: a block in either source hides the target.
//!
//! Moderators and administrators resolve exactly like any other account.
//! Nothing is cached; every call reads the provider again so that a block
//! takes effect on the very next request.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{AccountId, EffectiveBlockSet, Viewer};
use tracing::debug;

use crate::error::ResolveError;
use crate::ports::{BlockListProvider, BlockSetResolver};

pub struct EffectiveBlockSetResolver<P: BlockListProvider> {
    provider: Arc<P>,
}

impl<P: BlockListProvider> EffectiveBlockSetResolver<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    async fn instance_set(&self) -> Result<EffectiveBlockSet, ResolveError> {
        let entries = self.provider.instance_entries().await?;
        Ok(EffectiveBlockSet::from_entries(&entries))
    }
}

#[async_trait]
impl<P: BlockListProvider + 'static> BlockSetResolver for EffectiveBlockSetResolver<P> {
    async fn resolve(&self, viewer: &Viewer) -> Result<EffectiveBlockSet, ResolveError> {
        match viewer.account() {
            Some(account) => self.resolve_for_account(account).await,
            None => {
                let set = self.instance_set().await?;
                debug!(
                    accounts = set.blocked_accounts().len(),
                    hosts = set.blocked_hosts().len(),
                    "Resolved block set for anonymous viewer"
                );
                Ok(set)
            }
        }
    }

    async fn resolve_for_account(
        &self,
        account: &AccountId,
    ) -> Result<EffectiveBlockSet, ResolveError> {
        let mut set = self.instance_set().await?;
        let own = self.provider.account_entries(account).await?;
        set.extend_entries(&own);

        debug!(
            viewer = %account,
            accounts = set.blocked_accounts().len(),
            hosts = set.blocked_hosts().len(),
            "Resolved block set"
        );
        Ok(set)
    }
}
