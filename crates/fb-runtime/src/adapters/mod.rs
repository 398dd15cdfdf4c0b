//! # Adapter Implementations
//!
//! Concrete implementations of the outbound ports each subsystem declares.
//! Subsystem crates never depend on each other; the runtime connects them:
//!
//! ```text
//!  fb-01 BlockRegistryApi ──RegistryBlockLists──→ fb-02 BlockListProvider
//!  fb-02 BlockSetResolver ──ResolverBlockSets───→ fb-03 BlockSetProvider
//!                                              └→ fb-04 BlockSetProvider
//!  fb-01 IdentityDirectory ─DirectoryRecipients─→ fb-04 RecipientDirectory
//! ```

pub mod ports;

pub use ports::*;
