//! # Fedblock Test Suite
//!
//! Cross-subsystem scenarios run against a fully wired engine.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixture.rs              # Two-server world: accounts, videos, comments
//!     ├── account_blocklist.rs    # Blocks recorded by a single account
//!     ├── instance_blocklist.rs   # Blocks recorded by the instance
//!     └── notifications.rs        # Gate behaviour over the event bus
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fb-tests
//! cargo test -p fb-tests integration::instance_blocklist::
//! ```

#![allow(dead_code)]

pub mod integration;
