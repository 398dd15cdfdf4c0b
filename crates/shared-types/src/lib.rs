//! # Shared Types Crate
//!
//! Value types exchanged between the Fedblock subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Every type that crosses a subsystem boundary
//!   is defined here. Subsystem crates depend on this crate, never on each other.
//! - **Request-Scoped Block Sets**: `EffectiveBlockSet` is an immutable value
//!   computed per request and handed to filters explicitly.
//! - **Fail-Open Authorship**: Content exposes its author through `Authored`;
//!   an author that cannot be resolved is never treated as blocked.

pub mod accounts;
pub mod blocks;
pub mod content;
pub mod errors;
pub mod notifications;
pub mod pagination;

pub use accounts::*;
pub use blocks::*;
pub use content::*;
pub use errors::*;
pub use notifications::*;
pub use pagination::*;
