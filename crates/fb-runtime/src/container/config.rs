//! # Engine Configuration
//!
//! Unified configuration for all subsystems and runtime parameters.
//!
//! Defaults come from the `Default` impls below; every value with an
//! environment variable can be overridden at startup:
//!
//! | Variable              | Field                          |
//! |-----------------------|--------------------------------|
//! | `FB_LOCAL_HOST`       | `instance.local_host`          |
//! | `FB_INSTANCE_ACCOUNT` | `instance.instance_account`    |
//! | `FB_MAX_PAGE_SIZE`    | `registry.max_page_size`       |
//! | `FB_BUS_CAPACITY`     | `bus.channel_capacity`         |
//! | `FB_JOB_QUEUE_CAPACITY` | `bus.job_queue_capacity`     |

use fb_01_block_registry::domain::config::{
    DEFAULT_INSTANCE_ACCOUNT, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use fb_01_block_registry::{RegistryConfig, RegistryError};
use serde::{Deserialize, Serialize};
use shared_bus::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_JOB_QUEUE_CAPACITY};
use shared_types::{AccountId, Host, IdentifierError};
use thiserror::Error;

pub const ENV_LOCAL_HOST: &str = "FB_LOCAL_HOST";
pub const ENV_INSTANCE_ACCOUNT: &str = "FB_INSTANCE_ACCOUNT";
pub const ENV_MAX_PAGE_SIZE: &str = "FB_MAX_PAGE_SIZE";
pub const ENV_BUS_CAPACITY: &str = "FB_BUS_CAPACITY";
pub const ENV_JOB_QUEUE_CAPACITY: &str = "FB_JOB_QUEUE_CAPACITY";

/// Authority used when `FB_LOCAL_HOST` is not set.
pub const DEFAULT_LOCAL_HOST: &str = Host::DEFAULT_LOCAL;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Identity of the home instance.
    pub instance: InstanceConfig,
    /// Block registry paging.
    pub registry: RegistrySection,
    /// Event bus sizing.
    pub bus: BusConfig,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("bus channel capacity must be greater than zero")]
    ZeroBusCapacity,

    #[error("job queue capacity must be greater than zero")]
    ZeroJobQueueCapacity,

    #[error("registry configuration rejected: {0}")]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    pub local_host: Host,
    /// Account recorded as the blocking actor of instance-scope entries.
    pub instance_account: AccountId,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            local_host: Host::default_local(),
            instance_account: AccountId::local(DEFAULT_INSTANCE_ACCOUNT),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    /// Outcome events buffered per subscriber before it lags.
    pub channel_capacity: usize,
    /// Jobs buffered before submitters wait for the worker.
    pub job_queue_capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            job_queue_capacity: DEFAULT_JOB_QUEUE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Default configuration for the given home instance.
    pub fn for_host(local_host: Host) -> Self {
        let mut config = Self::default();
        config.instance.local_host = local_host;
        config
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_LOCAL_HOST) {
            self.instance.local_host = Host::parse(&host)?;
        }
        if let Some(account) = lookup(ENV_INSTANCE_ACCOUNT) {
            self.instance.instance_account =
                AccountId::parse_relative(&account, &self.instance.local_host)?;
        }
        if let Some(size) = lookup(ENV_MAX_PAGE_SIZE) {
            self.registry.max_page_size = parse_usize(ENV_MAX_PAGE_SIZE, &size)?;
        }
        if let Some(capacity) = lookup(ENV_BUS_CAPACITY) {
            self.bus.channel_capacity = parse_usize(ENV_BUS_CAPACITY, &capacity)?;
        }
        if let Some(capacity) = lookup(ENV_JOB_QUEUE_CAPACITY) {
            self.bus.job_queue_capacity = parse_usize(ENV_JOB_QUEUE_CAPACITY, &capacity)?;
        }
        Ok(())
    }

    /// Registry view of this configuration.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig::new(self.instance.local_host.clone())
            .with_instance_account(self.instance.instance_account.clone())
            .with_page_sizes(
                self.registry.default_page_size,
                self.registry.max_page_size,
            )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.channel_capacity == 0 {
            return Err(ConfigError::ZeroBusCapacity);
        }
        if self.bus.job_queue_capacity == 0 {
            return Err(ConfigError::ZeroJobQueueCapacity);
        }
        self.registry_config().validate()?;
        Ok(())
    }
}

fn parse_usize(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
            var,
            reason: e.to_string(),
        })
}
