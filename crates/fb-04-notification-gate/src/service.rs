//! Notification Pipeline
//!
//! plan → filter unknown recipients → gate every candidate → persist.
//!
//! All gate decisions are taken before the first write. If any recipient's
//! block set cannot be resolved the activity fails as a whole and nothing
//! is persisted, so a blocked origin can never slip through on a partial
//! failure.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{CommentActivity, Host, Notification};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{NotificationCandidate, NotificationGate, NotificationPlanner};
use crate::error::GateError;
use crate::metrics::GateMetrics;
use crate::ports::{
    BlockSetProvider, NotificationGateApi, NotificationSink, PipelineOutcome, RecipientDirectory,
};

pub struct NotificationPipeline<B, S, D>
where
    B: BlockSetProvider,
    S: NotificationSink,
    D: RecipientDirectory,
{
    planner: NotificationPlanner,
    block_sets: Arc<B>,
    sink: Arc<S>,
    directory: Arc<D>,
    metrics: Arc<GateMetrics>,
}

impl<B, S, D> NotificationPipeline<B, S, D>
where
    B: BlockSetProvider,
    S: NotificationSink,
    D: RecipientDirectory,
{
    pub fn new(local_host: Host, block_sets: Arc<B>, sink: Arc<S>, directory: Arc<D>) -> Self {
        Self {
            planner: NotificationPlanner::new(local_host),
            block_sets,
            sink,
            directory,
            metrics: Arc::new(GateMetrics::new()),
        }
    }

    pub fn metrics(&self) -> Arc<GateMetrics> {
        Arc::clone(&self.metrics)
    }

    async fn known_recipients(
        &self,
        candidates: Vec<NotificationCandidate>,
    ) -> Result<Vec<NotificationCandidate>, GateError> {
        let mut known = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if self.directory.is_local_account(&candidate.recipient).await? {
                known.push(candidate);
            } else {
                debug!(recipient = %candidate.recipient, "Skipping unknown recipient");
            }
        }
        Ok(known)
    }

    async fn run(&self, activity: &CommentActivity) -> Result<PipelineOutcome, GateError> {
        let planned = self.planner.plan(activity);
        let candidates = self.known_recipients(planned).await?;
        self.metrics.record_planned(candidates.len());

        let mut passed = Vec::new();
        let mut suppressed = Vec::new();
        for candidate in candidates {
            let set = self.block_sets.block_set_for(&candidate.recipient).await?;
            if NotificationGate::should_suppress(&candidate, &set) {
                debug!(
                    recipient = %candidate.recipient,
                    origin = %candidate.origin,
                    kind = ?candidate.kind,
                    "Notification suppressed"
                );
                suppressed.push(candidate);
            } else {
                passed.push(candidate);
            }
        }

        let delivered: Vec<Notification> = passed
            .into_iter()
            .map(|candidate| Notification {
                id: Uuid::new_v4(),
                recipient: candidate.recipient,
                kind: candidate.kind,
                origin: candidate.origin,
                comment_id: candidate.comment_id,
                video_id: candidate.video_id,
                created_at: activity.created_at,
            })
            .collect();

        if !delivered.is_empty() {
            self.sink.persist(delivered.clone()).await?;
        }

        self.metrics.record_delivered(delivered.len());
        self.metrics.record_suppressed(suppressed.len());

        Ok(PipelineOutcome {
            delivered,
            suppressed,
        })
    }
}

#[async_trait]
impl<B, S, D> NotificationGateApi for NotificationPipeline<B, S, D>
where
    B: BlockSetProvider + 'static,
    S: NotificationSink + 'static,
    D: RecipientDirectory + 'static,
{
    async fn process(&self, activity: &CommentActivity) -> Result<PipelineOutcome, GateError> {
        match self.run(activity).await {
            Ok(outcome) => {
                info!(
                    comment = activity.comment_id.0,
                    author = %activity.author,
                    delivered = outcome.delivered.len(),
                    suppressed = outcome.suppressed.len(),
                    "Comment notifications processed"
                );
                Ok(outcome)
            }
            Err(e) => {
                self.metrics.record_failure();
                warn!(comment = activity.comment_id.0, error = %e, "Comment notifications failed");
                Err(e)
            }
        }
    }
}
