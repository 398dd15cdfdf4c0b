//! # Notifications
//!
//! Logical notification records produced by the notification gate.
//! Delivery channels are out of scope; only persistence is modelled.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounts::AccountId;
use crate::content::{CommentId, Timestamp};

/// Which event produced the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Someone commented on a video the recipient owns.
    NewCommentOnMyVideo,
    /// The recipient was mentioned in a comment.
    CommentMention,
}

/// A persisted notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient: AccountId,
    pub kind: NotificationKind,
    /// Account whose action triggered the notification.
    pub origin: AccountId,
    pub comment_id: CommentId,
    pub video_id: Uuid,
    pub created_at: Timestamp,
}
