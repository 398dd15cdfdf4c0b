//! # FB-01 Block Registry
//!
//! Durable record of every block on the instance: account-scope lists owned
//! by individual accounts and the instance-scope list owned by the instance
//! system account.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): configuration and list queries
//!   - `RegistryConfig`: local host, instance account, page sizes
//!   - `ListQuery` / `SortKey`: offset/limit windows sorted on `createdAt`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `BlockRegistryApi`: Driving port (inbound API)
//!   - `BlockStore`, `IdentityDirectory`, `TimeSource`: Driven ports
//!
//! - **Service Layer** (`service`): `BlockRegistryService` implements
//!   `BlockRegistryApi`
//!
//! - **Handler Layer** (`handler/`): `BlocklistHandler`, the management
//!   surface (authorization, handle parsing, response views)
//!
//! - **Adapters Layer** (`adapters/`): in-memory store and directory
//!
//! ## Invariants
//!
//! - At most one entry per `(blocking_actor, target, scope)`; adds are idempotent.
//! - Nobody can block themselves or their own server.
//! - Only the instance account writes instance-scope entries.
//! - List `total` counts every matching entry, independent of the window.
//!
//! ## Usage Example
//!
//! ```ignore
//! use fb_01_block_registry::{
//!     BlockRegistryService, InMemoryBlockStore, InMemoryIdentityDirectory,
//!     RegistryConfig, SystemTimeSource,
//! };
//! use std::sync::Arc;
//!
//! let config = RegistryConfig::new(Host::parse("video.example")?);
//! let registry = BlockRegistryService::new(
//!     Arc::new(InMemoryBlockStore::new()),
//!     Arc::new(InMemoryIdentityDirectory::new()),
//!     Arc::new(SystemTimeSource),
//!     config,
//! )?;
//!
//! registry.add_block(&me, BlockTarget::Server(spam_host), BlockScope::Account).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod handler;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{InMemoryBlockStore, InMemoryIdentityDirectory, SteppingTimeSource};
pub use domain::{ListQuery, RegistryConfig, SortKey};
pub use error::{RegistryError, RegistryResult};
pub use handler::{AccountBlockView, AccountSummary, BlocklistHandler, ServerBlockView};
pub use ports::{
    AccountProfile, BlockRegistryApi, BlockStore, IdentityDirectory, SystemTimeSource, TimeSource,
};
pub use service::BlockRegistryService;
