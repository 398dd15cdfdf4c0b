//! Domain Layer
//!
//! Pure, synchronous filtering over explicit block sets. No I/O.

pub mod comment_tree;
pub mod visibility;

pub use comment_tree::{CommentThreadView, CommentTreeFilter, ThreadSummary};
pub use visibility::VisibilityFilter;
