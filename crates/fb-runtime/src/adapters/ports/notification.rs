//! # Notification Gate Port Adapters
//!
//! Implements the outbound ports required by fb-04-notification-gate.
//!
//! ## Ports Implemented
//!
//! - `BlockSetProvider` - the recipient's block set, resolved by fb-02
//! - `RecipientDirectory` - local accounts known to the identity directory

use std::sync::Arc;

use async_trait::async_trait;
use fb_01_block_registry::IdentityDirectory;
use fb_02_block_resolver::BlockSetResolver;
use fb_04_notification_gate::{BlockSetProvider, GateError, RecipientDirectory};
use shared_types::{AccountId, EffectiveBlockSet};

use super::visibility::ResolverBlockSets;

#[async_trait]
impl<R: BlockSetResolver> BlockSetProvider for ResolverBlockSets<R> {
    async fn block_set_for(&self, recipient: &AccountId) -> Result<EffectiveBlockSet, GateError> {
        self.resolver()
            .resolve_for_account(recipient)
            .await
            .map_err(|e| GateError::Resolve(e.to_string()))
    }
}

/// Answers "is this a local account that exists?" from fb-01's directory.
pub struct DirectoryRecipients<D: IdentityDirectory> {
    directory: Arc<D>,
}

impl<D: IdentityDirectory> DirectoryRecipients<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D: IdentityDirectory> RecipientDirectory for DirectoryRecipients<D> {
    async fn is_local_account(&self, account: &AccountId) -> Result<bool, GateError> {
        if !account.is_local() {
            return Ok(false);
        }
        let profile = self
            .directory
            .lookup_account(account)
            .await
            .map_err(|e| GateError::Directory(e.to_string()))?;
        Ok(profile.is_some())
    }
}
