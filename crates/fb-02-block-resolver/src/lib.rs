//! # FB-02 Block Resolver
//!
//! Computes the `EffectiveBlockSet` for one request.
//!
//! ## Architecture
//!
//! - **Ports Layer** (`ports/`)
//!   - `BlockSetResolver`: Driving port
//!   - `BlockListProvider`: Driven port, blocklist reads (backed by fb-01
//!     in the runtime)
//!
//! - **Service Layer** (`service`): `EffectiveBlockSetResolver`
//!
//! ## Invariants
//!
//! - Instance-scope entries apply to every viewer, anonymous included.
//! - The result is a plain union; it is identical for identical inputs.
//! - Roles grant no exemption.

pub mod error;
pub mod ports;
pub mod service;

pub use error::ResolveError;
pub use ports::{BlockListProvider, BlockSetResolver};
pub use service::EffectiveBlockSetResolver;
