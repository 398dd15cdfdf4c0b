//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::{CommentActivity, Notification};

use crate::domain::NotificationCandidate;
use crate::error::GateError;

/// What one processed activity produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Notifications that passed the gate and were persisted.
    pub delivered: Vec<Notification>,
    /// Candidates dropped because the origin is blocked for the recipient.
    pub suppressed: Vec<NotificationCandidate>,
}

/// Notification generation for comment activities (Driving Port)
#[async_trait]
pub trait NotificationGateApi: Send + Sync {
    /// Plans, gates and persists the notifications for one activity.
    ///
    /// On error nothing has been persisted for this activity.
    async fn process(&self, activity: &CommentActivity) -> Result<PipelineOutcome, GateError>;
}
