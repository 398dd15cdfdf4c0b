//! Ports Layer

pub mod inbound;
pub mod outbound;

pub use inbound::BlockSetResolver;
pub use outbound::BlockListProvider;
