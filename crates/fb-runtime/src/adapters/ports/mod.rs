//! # Port Adapters for Subsystem Integration

pub mod notification;
pub mod resolver;
pub mod visibility;

pub use notification::*;
pub use resolver::*;
pub use visibility::*;
