//! # FB-03 Visibility Filter
//!
//! Read-path filtering of videos and comment trees against an
//! `EffectiveBlockSet`.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure functions over explicit block sets
//!   - `VisibilityFilter`: flat lists of `Authored` items
//!   - `CommentTreeFilter`: thread lists and thread details
//!
//! - **Ports Layer** (`ports/`)
//!   - `VisibilityApi`: Driving port
//!   - `BlockSetProvider`: Driven port (resolver, wired by the runtime)
//!
//! - **Service Layer** (`service`): `VisibilityService`
//!
//! ## Invariants
//!
//! - Adding a block never makes an item visible; removing it restores
//!   exactly the previous result.
//! - A blocked host hides every account on it.
//! - An author that cannot be resolved is never hidden.
//! - A hidden reply takes its whole subtree with it.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{CommentThreadView, CommentTreeFilter, ThreadSummary, VisibilityFilter};
pub use error::VisibilityError;
pub use ports::{BlockSetProvider, VisibilityApi};
pub use service::VisibilityService;
