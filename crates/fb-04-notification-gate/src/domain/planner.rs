//! Notification planning
//!
//! Turns one comment activity into candidate notifications:
//!
//! - `NewCommentOnMyVideo` for the video owner, when the owner lives on this
//!   instance and did not write the comment.
//! - `CommentMention` for every distinct local account mentioned in the
//!   text, except the author and the video owner (the owner already gets
//!   the new-comment notification).

use serde::{Deserialize, Serialize};
use shared_types::{AccountId, CommentActivity, CommentId, Host, NotificationKind};
use uuid::Uuid;

use super::mentions::extract_mentions;

/// A notification that has not passed the gate yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCandidate {
    pub recipient: AccountId,
    pub kind: NotificationKind,
    /// Author of the comment.
    pub origin: AccountId,
    pub comment_id: CommentId,
    pub video_id: Uuid,
}

pub struct NotificationPlanner {
    local_host: Host,
}

impl NotificationPlanner {
    pub fn new(local_host: Host) -> Self {
        Self { local_host }
    }

    pub fn local_host(&self) -> &Host {
        &self.local_host
    }

    pub fn plan(&self, activity: &CommentActivity) -> Vec<NotificationCandidate> {
        let author = activity.author.clone().relative_to(&self.local_host);
        let owner = activity
            .video_owner
            .clone()
            .map(|owner| owner.relative_to(&self.local_host));

        let candidate = |recipient: AccountId, kind| NotificationCandidate {
            recipient,
            kind,
            origin: author.clone(),
            comment_id: activity.comment_id,
            video_id: activity.video_id,
        };

        let mut candidates = Vec::new();

        if let Some(owner) = owner.as_ref().filter(|o| o.is_local() && **o != author) {
            candidates.push(candidate(owner.clone(), NotificationKind::NewCommentOnMyVideo));
        }

        for mentioned in extract_mentions(&activity.text, &self.local_host) {
            if !mentioned.is_local() || mentioned == author || Some(&mentioned) == owner.as_ref() {
                continue;
            }
            candidates.push(candidate(mentioned, NotificationKind::CommentMention));
        }

        candidates
    }
}
