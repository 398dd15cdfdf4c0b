//! Handler Layer
//!
//! Authorization and request shaping in front of the registry service.

pub mod management;

pub use management::{
    AccountBlockView, AccountSummary, BlocklistHandler, ServerBlockView, ServerSummary,
};
