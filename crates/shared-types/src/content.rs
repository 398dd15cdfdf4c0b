//! # Content Entities
//!
//! Videos and comment trees as handed over by the (external) content
//! storage. Filters only ever look at authorship through [`Authored`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounts::AccountId;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Anything that can be hidden because of who wrote it.
pub trait Authored {
    /// Author of the item, `None` when it cannot be resolved.
    fn author(&self) -> Option<&AccountId>;
}

/// A published video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub name: String,
    pub owner: Option<AccountId>,
    pub created_at: Timestamp,
}

impl Video {
    pub fn new(name: impl Into<String>, owner: AccountId, created_at: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner: Some(owner),
            created_at,
        }
    }
}

impl Authored for Video {
    fn author(&self) -> Option<&AccountId> {
        self.owner.as_ref()
    }
}

/// Identifier of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u64);

/// A comment and its full reply subtree.
///
/// `children` are ordered as stored. A deleted comment stays in the tree as
/// a tombstone with no author and no text so its replies keep their place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: CommentId,
    pub video_id: Uuid,
    pub author: Option<AccountId>,
    pub text: String,
    pub in_reply_to: Option<CommentId>,
    pub created_at: Timestamp,
    pub deleted: bool,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    /// A top-level comment on a video.
    pub fn root(
        id: CommentId,
        video_id: Uuid,
        author: AccountId,
        text: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            video_id,
            author: Some(author),
            text: text.into(),
            in_reply_to: None,
            created_at,
            deleted: false,
            children: Vec::new(),
        }
    }

    /// A reply to `parent`, not yet attached to it.
    pub fn reply_to(
        parent: &CommentNode,
        id: CommentId,
        author: AccountId,
        text: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            video_id: parent.video_id,
            author: Some(author),
            text: text.into(),
            in_reply_to: Some(parent.id),
            created_at,
            deleted: false,
            children: Vec::new(),
        }
    }

    /// Attaches `child` as the last reply.
    #[must_use]
    pub fn with_reply(mut self, child: CommentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Turns the comment into a tombstone, keeping its replies.
    #[must_use]
    pub fn into_tombstone(mut self) -> Self {
        self.author = None;
        self.text.clear();
        self.deleted = true;
        self
    }

    pub fn is_root(&self) -> bool {
        self.in_reply_to.is_none()
    }

    pub fn is_reply(&self) -> bool {
        !self.is_root()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Depth-first search for a node by id, including `self`.
    pub fn find(&self, id: CommentId) -> Option<&CommentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

impl Authored for CommentNode {
    fn author(&self) -> Option<&AccountId> {
        self.author.as_ref()
    }
}

/// A new comment as seen by background jobs, whether it was posted locally
/// or received from a remote instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentActivity {
    pub comment_id: CommentId,
    pub video_id: Uuid,
    /// Owner of the commented video, `None` if unknown.
    pub video_owner: Option<AccountId>,
    pub author: AccountId,
    pub text: String,
    pub in_reply_to: Option<CommentId>,
    pub created_at: Timestamp,
}
