//! Comment tree filtering
//!
//! Pruning is branch-local: a reply by a blocked author disappears together
//! with its whole subtree, even if descendants were written by visible
//! accounts. Nothing is re-parented. Reply counts are recomputed over the
//! pruned tree, never taken from stored counters.
//!
//! Tombstones of deleted comments carry no author and stay in place.
//! Authors qualified with the home host are matched as local accounts.

use serde::{Deserialize, Serialize};
use shared_types::{
    AccountId, Authored, CommentId, CommentNode, EffectiveBlockSet, Host, Page, PageRequest,
    Timestamp,
};
use uuid::Uuid;

/// A thread as shown in a video's comment list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    pub id: CommentId,
    pub video_id: Uuid,
    pub author: Option<AccountId>,
    pub text: String,
    pub created_at: Timestamp,
    pub deleted: bool,
    /// Visible replies at any depth.
    pub total_replies: usize,
}

/// A single thread with its visible replies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadView {
    pub root: CommentNode,
    pub total_replies: usize,
}

pub struct CommentTreeFilter {
    local_host: Host,
}

impl CommentTreeFilter {
    pub fn new(local_host: Host) -> Self {
        Self { local_host }
    }

    fn hides(&self, node: &CommentNode, set: &EffectiveBlockSet) -> bool {
        set.blocks_author_on(node.author(), &self.local_host)
    }

    /// A copy of `node` whose children exclude blocked-author branches.
    ///
    /// The node itself is kept regardless of its own author.
    pub fn filter_node(&self, node: &CommentNode, set: &EffectiveBlockSet) -> CommentNode {
        let children = node
            .children
            .iter()
            .filter(|child| !self.hides(child, set))
            .map(|child| self.filter_node(child, set))
            .collect();

        CommentNode {
            id: node.id,
            video_id: node.video_id,
            author: node.author.clone(),
            text: node.text.clone(),
            in_reply_to: node.in_reply_to,
            created_at: node.created_at,
            deleted: node.deleted,
            children,
        }
    }

    /// Visible descendants of an already filtered node.
    pub fn count_replies(node: &CommentNode) -> usize {
        node.descendant_count()
    }

    /// Thread detail; `None` when the root itself is hidden.
    pub fn filter_thread(
        &self,
        root: &CommentNode,
        set: &EffectiveBlockSet,
    ) -> Option<CommentThreadView> {
        if self.hides(root, set) {
            return None;
        }
        let root = self.filter_node(root, set);
        let total_replies = Self::count_replies(&root);
        Some(CommentThreadView {
            root,
            total_replies,
        })
    }

    /// Thread list for a video, order preserved.
    pub fn filter_threads(
        &self,
        threads: &[CommentNode],
        set: &EffectiveBlockSet,
    ) -> Vec<ThreadSummary> {
        threads
            .iter()
            .filter_map(|thread| self.filter_thread(thread, set))
            .map(|view| ThreadSummary {
                id: view.root.id,
                video_id: view.root.video_id,
                author: view.root.author,
                text: view.root.text,
                created_at: view.root.created_at,
                deleted: view.root.deleted,
                total_replies: view.total_replies,
            })
            .collect()
    }

    pub fn filter_threads_page(
        &self,
        threads: &[CommentNode],
        set: &EffectiveBlockSet,
        page: PageRequest,
    ) -> Page<ThreadSummary> {
        page.apply(self.filter_threads(threads, set))
    }
}
