//! Ports Layer

pub mod inbound;
pub mod outbound;

pub use inbound::VisibilityApi;
pub use outbound::BlockSetProvider;
