//! Domain Layer
//!
//! Pure configuration and query logic, no I/O.

pub mod config;
pub mod query;

pub use config::{RegistryConfig, DEFAULT_INSTANCE_ACCOUNT, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use query::{ListQuery, SortKey};
