//! Registry configuration and validation

use serde::{Deserialize, Serialize};
use shared_types::{AccountId, Host};

use crate::error::RegistryError;

/// Page size used when a list query does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Largest page a single list query may return.
pub const MAX_PAGE_SIZE: usize = 100;

/// Name of the instance system account on a fresh install.
pub const DEFAULT_INSTANCE_ACCOUNT: &str = "peertube";

/// Block registry configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Authority of the home instance
    pub local_host: Host,
    /// Account that owns every instance-scope block
    pub instance_account: AccountId,
    /// Page size when a query asks for none
    pub default_page_size: usize,
    /// Upper bound on any requested page size
    pub max_page_size: usize,
}

impl RegistryConfig {
    /// Configuration with default paging and the default instance account.
    pub fn new(local_host: Host) -> Self {
        Self {
            local_host,
            instance_account: AccountId::local(DEFAULT_INSTANCE_ACCOUNT),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    pub fn with_instance_account(mut self, account: AccountId) -> Self {
        self.instance_account = account;
        self
    }

    pub fn with_page_sizes(mut self, default_page_size: usize, max_page_size: usize) -> Self {
        self.default_page_size = default_page_size;
        self.max_page_size = max_page_size;
        self
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        if !self.instance_account.is_local() {
            return Err(RegistryError::InvalidConfig(format!(
                "instance account {} must live on the home instance",
                self.instance_account
            )));
        }

        if self.default_page_size == 0 {
            return Err(RegistryError::InvalidConfig(
                "default_page_size cannot be 0".to_string(),
            ));
        }

        if self.max_page_size < self.default_page_size {
            return Err(RegistryError::InvalidConfig(format!(
                "max_page_size {} is below default_page_size {}",
                self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }
}
