//! # Accounts and Viewers
//!
//! Identifiers for accounts and servers on the federated network, plus the
//! identity a read request is served to.
//!
//! An account is addressed as `name` (home instance) or `name@host` (remote).
//! The home instance is represented by `host: None`, so `user1` and
//! `user1@<local host>` resolve to the same identifier once made relative
//! to the local host.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::IdentifierError;

/// Account names: letters, digits, `_`, `.` and `-`, at most 50 characters.
pub static ACCOUNT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{1,50}$").unwrap());

/// Host authorities: DNS-ish labels with an optional port.
pub static HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9.\-]{0,252}[a-z0-9])?(:[0-9]{1,5})?$").unwrap());

/// A server authority such as `video.example.org` or `localhost:9001`.
///
/// Always stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Host(String);

impl Host {
    /// Authority of a development install.
    pub const DEFAULT_LOCAL: &'static str = "localhost:9000";

    /// [`Host::DEFAULT_LOCAL`]; the literal is already in normalized form.
    pub fn default_local() -> Self {
        Self(Self::DEFAULT_LOCAL.to_string())
    }

    /// Validates and normalizes a host.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if !HOST_REGEX.is_match(&normalized) {
            return Err(IdentifierError::InvalidHost(input.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Host {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Globally unique account identifier: `(name, host)`.
///
/// `host` is `None` for accounts living on the home instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId {
    name: String,
    host: Option<Host>,
}

impl AccountId {
    /// Account on the home instance. The name is not validated.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: None,
        }
    }

    /// Account on a remote instance. The name is not validated.
    pub fn remote(name: impl Into<String>, host: Host) -> Self {
        Self {
            name: name.into(),
            host: Some(host),
        }
    }

    /// Parses `name`, `@name`, `name@host` or `@name@host`.
    ///
    /// An explicit host is kept as-is; use [`AccountId::parse_relative`]
    /// when the input may name the local host.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let trimmed = input.trim();
        let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if handle.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let (name, host) = match handle.split_once('@') {
            Some((name, host)) => (name, Some(Host::parse(host)?)),
            None => (handle, None),
        };

        if !ACCOUNT_NAME_REGEX.is_match(name) {
            return Err(IdentifierError::InvalidName(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            host,
        })
    }

    /// Parses an identifier and folds an explicit `@local_host` into a local account.
    pub fn parse_relative(input: &str, local_host: &Host) -> Result<Self, IdentifierError> {
        Self::parse(input).map(|id| id.relative_to(local_host))
    }

    /// Drops the host when it designates the home instance.
    #[must_use]
    pub fn relative_to(self, local_host: &Host) -> Self {
        match &self.host {
            Some(host) if host == local_host => Self::local(self.name),
            _ => self,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote host, `None` for local accounts.
    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    pub fn is_local(&self) -> bool {
        self.host.is_none()
    }

    /// Host the account lives on, substituting the local host for local accounts.
    pub fn effective_host<'a>(&'a self, local_host: &'a Host) -> &'a Host {
        self.host.as_ref().unwrap_or(local_host)
    }

    /// Fully qualified `name@host` form.
    pub fn qualified(&self, local_host: &Host) -> String {
        format!("{}@{}", self.name, self.effective_host(local_host))
    }
}

impl FromStr for AccountId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}@{}", self.name, host),
            None => f.write_str(&self.name),
        }
    }
}

/// Role of an authenticated user on the home instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Moderator,
    Administrator,
}

impl Role {
    /// Whether the role may manage the instance-wide blocklist.
    ///
    /// This is a management right only. It grants no visibility exemption:
    /// moderators see instance-scope blocks like every other viewer.
    pub fn can_manage_instance_blocklist(self) -> bool {
        matches!(self, Self::Moderator | Self::Administrator)
    }
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub account: AccountId,
    pub role: Role,
}

impl Principal {
    pub fn new(account: AccountId, role: Role) -> Self {
        Self { account, role }
    }

    pub fn user(account: AccountId) -> Self {
        Self::new(account, Role::User)
    }
}

/// Identity a read request is served to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viewer {
    Anonymous,
    Authenticated(Principal),
}

impl Viewer {
    /// Account of the viewer, `None` when anonymous.
    pub fn account(&self) -> Option<&AccountId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(principal) => Some(&principal.account),
        }
    }
}

impl From<Principal> for Viewer {
    fn from(principal: Principal) -> Self {
        Self::Authenticated(principal)
    }
}
