//! Inbound Ports (Driving Ports)
//!
//! Read-path queries. Raw content comes from the caller (content storage is
//! an external collaborator); the service only decides what is visible.

use async_trait::async_trait;
use shared_types::{CommentNode, Page, PageRequest, Video, Viewer};

use crate::domain::{CommentThreadView, ThreadSummary};
use crate::error::VisibilityError;

#[async_trait]
pub trait VisibilityApi: Send + Sync {
    /// Listing of videos visible to `viewer`.
    async fn visible_videos(
        &self,
        viewer: &Viewer,
        raw: &[Video],
        page: PageRequest,
    ) -> Result<Page<Video>, VisibilityError>;

    /// Comment thread list of one video.
    async fn visible_threads(
        &self,
        viewer: &Viewer,
        raw: &[CommentNode],
        page: PageRequest,
    ) -> Result<Page<ThreadSummary>, VisibilityError>;

    /// One thread with its replies, `None` when the root is hidden.
    async fn thread_detail(
        &self,
        viewer: &Viewer,
        root: &CommentNode,
    ) -> Result<Option<CommentThreadView>, VisibilityError>;
}
