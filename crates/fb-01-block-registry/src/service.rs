//! Block Registry Service
//!
//! Implements `BlockRegistryApi` over the injected store, directory and clock.
//!
//! ## Guards on `add_block`
//!
//! 1. Instance scope may only be recorded by the instance account.
//! 2. An actor cannot block itself or its own server; the instance list
//!    cannot hold the instance account or the local host.
//! 3. The target must be known to the identity directory.
//!
//! Validation happens before any write, so a rejected add leaves the store
//! untouched.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{AccountId, BlockEntry, BlockScope, BlockTarget, Page};
use tracing::{debug, info};

use crate::domain::{ListQuery, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use crate::ports::{BlockRegistryApi, BlockStore, IdentityDirectory, InsertOutcome, NewBlock, TimeSource};

pub struct BlockRegistryService<S, D, T>
where
    S: BlockStore,
    D: IdentityDirectory,
    T: TimeSource,
{
    store: Arc<S>,
    directory: Arc<D>,
    clock: Arc<T>,
    config: RegistryConfig,
}

impl<S, D, T> BlockRegistryService<S, D, T>
where
    S: BlockStore,
    D: IdentityDirectory,
    T: TimeSource,
{
    pub fn new(
        store: Arc<S>,
        directory: Arc<D>,
        clock: Arc<T>,
        config: RegistryConfig,
    ) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            directory,
            clock,
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn directory(&self) -> &Arc<D> {
        &self.directory
    }

    fn check_scope(&self, actor: &AccountId, scope: BlockScope) -> RegistryResult<()> {
        if scope == BlockScope::Instance && actor != &self.config.instance_account {
            return Err(RegistryError::Unauthorized(format!(
                "{actor} cannot write the instance blocklist"
            )));
        }
        Ok(())
    }

    fn check_target(
        &self,
        actor: &AccountId,
        target: &BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<()> {
        let local_host = &self.config.local_host;
        let invalid = |reason| RegistryError::InvalidTarget {
            target: target.clone(),
            reason,
        };

        match target {
            BlockTarget::Account(account) if account == actor => Err(invalid("cannot block yourself")),
            BlockTarget::Account(account)
                if scope == BlockScope::Instance && account == &self.config.instance_account =>
            {
                Err(invalid("cannot block the instance account"))
            }
            BlockTarget::Server(host) if host == actor.effective_host(local_host) => {
                Err(invalid("cannot block your own server"))
            }
            BlockTarget::Server(host) if host == local_host => {
                Err(invalid("cannot block the local server"))
            }
            _ => Ok(()),
        }
    }

    async fn check_known(&self, target: &BlockTarget) -> RegistryResult<()> {
        let known = match target {
            BlockTarget::Account(account) => self.directory.lookup_account(account).await?.is_some(),
            BlockTarget::Server(host) => self.directory.knows_host(host).await?,
        };

        if known {
            Ok(())
        } else {
            Err(RegistryError::UnknownTarget(target.clone()))
        }
    }
}

#[async_trait]
impl<S, D, T> BlockRegistryApi for BlockRegistryService<S, D, T>
where
    S: BlockStore + 'static,
    D: IdentityDirectory + 'static,
    T: TimeSource + 'static,
{
    async fn add_block(
        &self,
        blocking_actor: &AccountId,
        target: BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<BlockEntry> {
        self.check_scope(blocking_actor, scope)?;
        self.check_target(blocking_actor, &target, scope)?;
        self.check_known(&target).await?;

        let outcome = self
            .store
            .insert_if_absent(NewBlock {
                blocking_actor: blocking_actor.clone(),
                target,
                scope,
                created_at: self.clock.now(),
            })
            .await?;

        match outcome {
            InsertOutcome::Inserted(entry) => {
                info!(
                    actor = %entry.blocking_actor,
                    target = %entry.target,
                    scope = ?entry.scope,
                    id = entry.id.0,
                    "Block added"
                );
                Ok(entry)
            }
            InsertOutcome::Existing(entry) => {
                debug!(
                    actor = %entry.blocking_actor,
                    target = %entry.target,
                    "Block already present"
                );
                Ok(entry)
            }
        }
    }

    async fn remove_block(
        &self,
        blocking_actor: &AccountId,
        target: &BlockTarget,
        scope: BlockScope,
    ) -> RegistryResult<()> {
        self.check_scope(blocking_actor, scope)?;

        match self.store.remove(blocking_actor, target, scope).await? {
            Some(entry) => {
                info!(
                    actor = %entry.blocking_actor,
                    target = %entry.target,
                    scope = ?entry.scope,
                    "Block removed"
                );
                Ok(())
            }
            None => Err(RegistryError::NotFound {
                actor: blocking_actor.clone(),
                target: target.clone(),
                scope,
            }),
        }
    }

    async fn list_blocks(
        &self,
        blocking_actor: &AccountId,
        scope: BlockScope,
        query: ListQuery,
    ) -> RegistryResult<Page<BlockEntry>> {
        let page = query.page(self.config.default_page_size, self.config.max_page_size)?;

        let mut entries = self.store.select(scope, Some(blocking_actor)).await?;
        if let Some(kind) = query.kind {
            entries.retain(|entry| entry.target.kind() == kind);
        }
        query.sort.sort(&mut entries);

        Ok(page.apply(entries))
    }

    async fn entries_in_scope(&self, scope: BlockScope) -> RegistryResult<Vec<BlockEntry>> {
        self.store.select(scope, None).await
    }

    async fn entries_of(
        &self,
        actor: &AccountId,
        scope: BlockScope,
    ) -> RegistryResult<Vec<BlockEntry>> {
        self.store.select(scope, Some(actor)).await
    }
}
