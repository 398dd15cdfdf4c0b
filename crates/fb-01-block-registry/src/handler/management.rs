//! Blocklist management handler
//!
//! The management surface in front of the registry. Callers address targets
//! as `name`, `name@host` or `host`; responses are the camelCase views the
//! client expects (`byAccount`, `blockedAccount`, `blockedServer`, `createdAt`).
//!
//! Instance-scope requests are recorded under the instance account and
//! require the `ManageInstanceBlocklist` right (moderators and administrators).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared_types::{
    AccountId, BlockEntry, BlockScope, BlockTarget, Host, Page, Principal, TargetKind, Timestamp,
};
use tracing::warn;

use crate::domain::{ListQuery, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use crate::ports::{BlockRegistryApi, IdentityDirectory};

/// Account as rendered in blocklist responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub name: String,
    /// Always the qualified host, local accounts included.
    pub host: String,
    pub display_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSummary {
    pub host: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBlockView {
    pub by_account: AccountSummary,
    pub blocked_account: AccountSummary,
    pub created_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerBlockView {
    pub by_account: AccountSummary,
    pub blocked_server: ServerSummary,
    pub created_at: Timestamp,
}

pub struct BlocklistHandler<R, D>
where
    R: BlockRegistryApi,
    D: IdentityDirectory,
{
    registry: Arc<R>,
    directory: Arc<D>,
    local_host: Host,
    instance_account: AccountId,
}

impl<R, D> BlocklistHandler<R, D>
where
    R: BlockRegistryApi,
    D: IdentityDirectory,
{
    pub fn new(registry: Arc<R>, directory: Arc<D>, config: &RegistryConfig) -> Self {
        Self {
            registry,
            directory,
            local_host: config.local_host.clone(),
            instance_account: config.instance_account.clone(),
        }
    }

    /// Account the entry is recorded under.
    fn acting_account(&self, caller: &Principal, scope: BlockScope) -> RegistryResult<AccountId> {
        match scope {
            BlockScope::Account => Ok(caller.account.clone()),
            BlockScope::Instance if caller.role.can_manage_instance_blocklist() => {
                Ok(self.instance_account.clone())
            }
            BlockScope::Instance => {
                warn!(caller = %caller.account, "Instance blocklist access denied");
                Err(RegistryError::Unauthorized(format!(
                    "{} lacks the ManageInstanceBlocklist right",
                    caller.account
                )))
            }
        }
    }

    fn account_target(&self, handle: &str) -> RegistryResult<BlockTarget> {
        Ok(BlockTarget::Account(AccountId::parse_relative(
            handle,
            &self.local_host,
        )?))
    }

    fn server_target(host: &str) -> RegistryResult<BlockTarget> {
        Ok(BlockTarget::Server(Host::parse(host)?))
    }

    pub async fn block_account(
        &self,
        caller: &Principal,
        scope: BlockScope,
        handle: &str,
    ) -> RegistryResult<AccountBlockView> {
        let actor = self.acting_account(caller, scope)?;
        let target = self.account_target(handle)?;
        let entry = self.registry.add_block(&actor, target, scope).await?;
        self.account_view(&entry).await
    }

    pub async fn unblock_account(
        &self,
        caller: &Principal,
        scope: BlockScope,
        handle: &str,
    ) -> RegistryResult<()> {
        let actor = self.acting_account(caller, scope)?;
        let target = self.account_target(handle)?;
        self.registry.remove_block(&actor, &target, scope).await
    }

    pub async fn block_server(
        &self,
        caller: &Principal,
        scope: BlockScope,
        host: &str,
    ) -> RegistryResult<ServerBlockView> {
        let actor = self.acting_account(caller, scope)?;
        let target = Self::server_target(host)?;
        let entry = self.registry.add_block(&actor, target, scope).await?;
        self.server_view(&entry).await
    }

    pub async fn unblock_server(
        &self,
        caller: &Principal,
        scope: BlockScope,
        host: &str,
    ) -> RegistryResult<()> {
        let actor = self.acting_account(caller, scope)?;
        let target = Self::server_target(host)?;
        self.registry.remove_block(&actor, &target, scope).await
    }

    pub async fn list_account_blocks(
        &self,
        caller: &Principal,
        scope: BlockScope,
        query: ListQuery,
    ) -> RegistryResult<Page<AccountBlockView>> {
        let actor = self.acting_account(caller, scope)?;
        let page = self
            .registry
            .list_blocks(&actor, scope, query.of_kind(TargetKind::Account))
            .await?;

        let mut data = Vec::with_capacity(page.data.len());
        for entry in &page.data {
            data.push(self.account_view(entry).await?);
        }
        Ok(Page {
            total: page.total,
            data,
        })
    }

    pub async fn list_server_blocks(
        &self,
        caller: &Principal,
        scope: BlockScope,
        query: ListQuery,
    ) -> RegistryResult<Page<ServerBlockView>> {
        let actor = self.acting_account(caller, scope)?;
        let page = self
            .registry
            .list_blocks(&actor, scope, query.of_kind(TargetKind::Server))
            .await?;

        let mut data = Vec::with_capacity(page.data.len());
        for entry in &page.data {
            data.push(self.server_view(entry).await?);
        }
        Ok(Page {
            total: page.total,
            data,
        })
    }

    async fn summary(&self, account: &AccountId) -> RegistryResult<AccountSummary> {
        let display_name = self
            .directory
            .lookup_account(account)
            .await?
            .map_or_else(|| account.name().to_string(), |profile| profile.display_name);

        Ok(AccountSummary {
            name: account.name().to_string(),
            host: account.effective_host(&self.local_host).to_string(),
            display_name,
        })
    }

    async fn account_view(&self, entry: &BlockEntry) -> RegistryResult<AccountBlockView> {
        let BlockTarget::Account(blocked) = &entry.target else {
            return Err(RegistryError::Storage(format!(
                "entry {} is not an account block",
                entry.id.0
            )));
        };

        Ok(AccountBlockView {
            by_account: self.summary(&entry.blocking_actor).await?,
            blocked_account: self.summary(blocked).await?,
            created_at: entry.created_at,
        })
    }

    async fn server_view(&self, entry: &BlockEntry) -> RegistryResult<ServerBlockView> {
        let BlockTarget::Server(host) = &entry.target else {
            return Err(RegistryError::Storage(format!(
                "entry {} is not a server block",
                entry.id.0
            )));
        };

        Ok(ServerBlockView {
            by_account: self.summary(&entry.blocking_actor).await?,
            blocked_server: ServerSummary {
                host: host.to_string(),
            },
            created_at: entry.created_at,
        })
    }
}
