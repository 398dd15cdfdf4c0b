//! # Subsystem Container
//!
//! Central container holding the subsystem instances, wired through the
//! port adapters in `crate::adapters`.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, EngineConfig};
pub use subsystems::EngineContainer;
