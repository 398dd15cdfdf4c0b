//! # Integration Scenarios
//!
//! Every scenario runs against the engine as the runtime wires it:
//! management calls go through `BlocklistHandler`, reads through
//! `VisibilityService`, and comment jobs travel over the shared bus to the
//! notification worker.
//!
//! The world is the one from `fixture`: a home instance `localhost:9001`
//! federating with `localhost:9002`.

#[cfg(test)]
pub mod fixture;

mod account_blocklist;
mod instance_blocklist;
mod notifications;
