//! Visibility Service
//!
//! Resolves the viewer's block set once per request and hands it to the
//! pure filters.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{CommentNode, Host, Page, PageRequest, Video, Viewer};
use tracing::debug;

use crate::domain::{CommentThreadView, CommentTreeFilter, ThreadSummary, VisibilityFilter};
use crate::error::VisibilityError;
use crate::ports::{BlockSetProvider, VisibilityApi};

pub struct VisibilityService<P: BlockSetProvider> {
    provider: Arc<P>,
    videos: VisibilityFilter,
    comments: CommentTreeFilter,
}

impl<P: BlockSetProvider> VisibilityService<P> {
    pub fn new(local_host: Host, provider: Arc<P>) -> Self {
        Self {
            provider,
            videos: VisibilityFilter::new(local_host.clone()),
            comments: CommentTreeFilter::new(local_host),
        }
    }
}

#[async_trait]
impl<P: BlockSetProvider + 'static> VisibilityApi for VisibilityService<P> {
    async fn visible_videos(
        &self,
        viewer: &Viewer,
        raw: &[Video],
        page: PageRequest,
    ) -> Result<Page<Video>, VisibilityError> {
        let set = self.provider.block_set(viewer).await?;
        let result = self.videos.filter_page(raw, &set, page);
        debug!(raw = raw.len(), visible = result.total, "Filtered videos");
        Ok(result)
    }

    async fn visible_threads(
        &self,
        viewer: &Viewer,
        raw: &[CommentNode],
        page: PageRequest,
    ) -> Result<Page<ThreadSummary>, VisibilityError> {
        let set = self.provider.block_set(viewer).await?;
        let result = self.comments.filter_threads_page(raw, &set, page);
        debug!(raw = raw.len(), visible = result.total, "Filtered comment threads");
        Ok(result)
    }

    async fn thread_detail(
        &self,
        viewer: &Viewer,
        root: &CommentNode,
    ) -> Result<Option<CommentThreadView>, VisibilityError> {
        let set = self.provider.block_set(viewer).await?;
        Ok(self.comments.filter_thread(root, &set))
    }
}
