//! # Block Entries and Effective Block Sets
//!
//! - `BlockEntry`: a persisted block owned by the block registry.
//! - `EffectiveBlockSet`: the merged, per-request view of every block that
//!   applies to one viewer. Never persisted.
//!
//! ## Invariants
//!
//! - **Host implies account**: an account whose host is in `blocked_hosts`
//!   is blocked even if it is absent from `blocked_accounts`.
//! - **Blocks only restrict**: merging two sets is a plain union.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::accounts::{AccountId, Host};
use crate::content::Timestamp;

/// Registry-assigned identifier of a block entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u64);

/// Whose views a block applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockScope {
    /// Only the blocking actor's own views.
    Account,
    /// Every view served by the instance, whoever the viewer is.
    Instance,
}

/// What kind of target a block addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Account,
    Server,
}

/// The account or server being blocked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockTarget {
    Account(AccountId),
    Server(Host),
}

impl BlockTarget {
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Account(_) => TargetKind::Account,
            Self::Server(_) => TargetKind::Server,
        }
    }
}

impl fmt::Display for BlockTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(account) => write!(f, "account:{account}"),
            Self::Server(host) => write!(f, "server:{host}"),
        }
    }
}

/// A block recorded by `blocking_actor` against `target`.
///
/// For instance-scope blocks the actor is the instance system account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    pub id: BlockId,
    pub blocking_actor: AccountId,
    pub target: BlockTarget,
    pub scope: BlockScope,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: Timestamp,
}

impl BlockEntry {
    /// Identity of the entry; at most one entry exists per key.
    pub fn key(&self) -> (AccountId, BlockTarget, BlockScope) {
        (self.blocking_actor.clone(), self.target.clone(), self.scope)
    }
}

/// Accounts and hosts hidden from one viewer for the duration of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveBlockSet {
    blocked_accounts: BTreeSet<AccountId>,
    blocked_hosts: BTreeSet<Host>,
}

impl EffectiveBlockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from block entries, ignoring their scope and owner.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a BlockEntry>) -> Self {
        let mut set = Self::new();
        set.extend_entries(entries);
        set
    }

    /// Adds the targets of `entries` to the set.
    pub fn extend_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a BlockEntry>) {
        for entry in entries {
            self.insert_target(&entry.target);
        }
    }

    pub fn insert_target(&mut self, target: &BlockTarget) {
        match target {
            BlockTarget::Account(account) => {
                self.blocked_accounts.insert(account.clone());
            }
            BlockTarget::Server(host) => {
                self.blocked_hosts.insert(host.clone());
            }
        }
    }

    /// Union of two sets.
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        self.blocked_accounts
            .extend(other.blocked_accounts.iter().cloned());
        self.blocked_hosts.extend(other.blocked_hosts.iter().cloned());
        self
    }

    /// Whether `account` is hidden, directly or through its host.
    pub fn is_blocked(&self, account: &AccountId) -> bool {
        if self.blocked_accounts.contains(account) {
            return true;
        }
        account
            .host()
            .is_some_and(|host| self.blocked_hosts.contains(host))
    }

    /// Fail-open check for content authors: an unknown author is never blocked.
    pub fn blocks_author(&self, author: Option<&AccountId>) -> bool {
        author.is_some_and(|account| self.is_blocked(account))
    }

    /// [`Self::blocks_author`] where an author qualified with `local_host`
    /// counts as the local account of the same name.
    pub fn blocks_author_on(&self, author: Option<&AccountId>, local_host: &Host) -> bool {
        author.is_some_and(|account| match account.host() {
            Some(host) if host == local_host => {
                self.is_blocked(&AccountId::local(account.name()))
            }
            _ => self.is_blocked(account),
        })
    }

    pub fn blocked_accounts(&self) -> &BTreeSet<AccountId> {
        &self.blocked_accounts
    }

    pub fn blocked_hosts(&self) -> &BTreeSet<Host> {
        &self.blocked_hosts
    }

    pub fn is_empty(&self) -> bool {
        self.blocked_accounts.is_empty() && self.blocked_hosts.is_empty()
    }
}
