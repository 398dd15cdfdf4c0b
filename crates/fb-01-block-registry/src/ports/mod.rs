//! Ports Layer
//!
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - storage, identity directory, clock

pub mod inbound;
pub mod outbound;

pub use inbound::BlockRegistryApi;
pub use outbound::{
    AccountProfile, BlockStore, IdentityDirectory, InsertOutcome, NewBlock, SystemTimeSource,
    TimeSource,
};
