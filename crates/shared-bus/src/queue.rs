//! # Job Queue
//!
//! Point-to-point delivery of federation jobs to a single worker.
//!
//! The broadcast bus overwrites events a slow subscriber has not read yet.
//! Jobs must not be lost that way, so they travel over a bounded `mpsc`
//! channel instead: a full queue makes [`JobSender::submit`] wait for room.

use serde::{Deserialize, Serialize};
use shared_types::CommentActivity;
use thiserror::Error;
use tokio::sync::mpsc;

/// Jobs buffered before submitters wait.
pub const DEFAULT_JOB_QUEUE_CAPACITY: usize = 256;

/// A unit of background work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FederationJob {
    /// A comment was created locally or received from a remote instance.
    CommentCreated(CommentActivity),
}

impl FederationJob {
    /// Short job label used in outcome events and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::CommentCreated(activity) => {
                format!("comment-created:{}", activity.comment_id.0)
            }
        }
    }
}

/// Errors from queue operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The worker stopped accepting jobs.
    #[error("Job queue closed")]
    Closed,
}

/// Create a bounded job queue. A zero capacity is raised to one.
#[must_use]
pub fn job_queue(capacity: usize) -> (JobSender, JobReceiver) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (JobSender { sender }, JobReceiver { receiver })
}

/// Submitting half; cheap to clone.
#[derive(Debug, Clone)]
pub struct JobSender {
    sender: mpsc::Sender<FederationJob>,
}

impl JobSender {
    /// Enqueue a job, waiting while the queue is full.
    pub async fn submit(&self, job: FederationJob) -> Result<(), QueueError> {
        self.sender.send(job).await.map_err(|_| QueueError::Closed)
    }

    /// Jobs waiting to be picked up.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.sender.max_capacity()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Consuming half, owned by the worker.
#[derive(Debug)]
pub struct JobReceiver {
    receiver: mpsc::Receiver<FederationJob>,
}

impl JobReceiver {
    /// Next job; `None` once the queue is closed and drained.
    pub async fn recv(&mut self) -> Option<FederationJob> {
        self.receiver.recv().await
    }

    /// Refuse new jobs. Jobs already queued can still be received.
    pub fn close(&mut self) {
        self.receiver.close();
    }
}
