//! In-memory identity directory
//!
//! Stands in for the account and actor tables. Accounts are registered with
//! their display name; hosts become known when an account on them is
//! registered or when they are added explicitly.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountId, Host};

use crate::error::RegistryResult;
use crate::ports::{AccountProfile, IdentityDirectory};

#[derive(Default)]
pub struct InMemoryIdentityDirectory {
    accounts: RwLock<HashMap<AccountId, AccountProfile>>,
    hosts: RwLock<BTreeSet<Host>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account whose display name equals its name.
    pub fn register(&self, account: AccountId) {
        let display_name = account.name().to_string();
        self.register_with_name(account, display_name);
    }

    pub fn register_with_name(&self, account: AccountId, display_name: impl Into<String>) {
        if let Some(host) = account.host() {
            self.hosts.write().insert(host.clone());
        }
        let profile = AccountProfile {
            id: account.clone(),
            display_name: display_name.into(),
        };
        self.accounts.write().insert(account, profile);
    }

    pub fn register_host(&self, host: Host) {
        self.hosts.write().insert(host);
    }

    /// Synchronous lookup for callers outside the async ports.
    pub fn profile(&self, account: &AccountId) -> Option<AccountProfile> {
        self.accounts.read().get(account).cloned()
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn lookup_account(&self, account: &AccountId) -> RegistryResult<Option<AccountProfile>> {
        Ok(self.profile(account))
    }

    async fn knows_host(&self, host: &Host) -> RegistryResult<bool> {
        Ok(self.hosts.read().contains(host))
    }
}
