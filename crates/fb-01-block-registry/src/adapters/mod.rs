//! Adapters Layer (Driven Adapters)
//!
//! - `InMemoryBlockStore` - block persistence
//! - `InMemoryIdentityDirectory` - account and host lookup
//! - `SteppingTimeSource` - deterministic clock

pub mod clock;
pub mod directory;
pub mod memory_store;

pub use clock::SteppingTimeSource;
pub use directory::InMemoryIdentityDirectory;
pub use memory_store::InMemoryBlockStore;
