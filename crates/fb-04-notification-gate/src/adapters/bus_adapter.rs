//! Job Queue Adapter for the Notification Gate
//!
//! Takes `CommentCreated` jobs off the job queue, runs the notification
//! pipeline and reports the outcome on the event bus:
//!
//! - `NotificationCreated` for every persisted notification
//! - `NotificationSuppressed` for every candidate the gate dropped
//! - `JobCompleted` once per successful job, also when nothing was planned
//! - `JobFailed` on the dead-letter topic when the job fails (no retry)
//!
//! On shutdown the queue is closed and the jobs already queued are still
//! processed before the worker returns.

use std::sync::Arc;

use shared_bus::events::NOTIFICATION_GATE_ID;
use shared_bus::{EventPublisher, FederationEvent, FederationJob, InMemoryEventBus, JobReceiver};
use shared_types::CommentActivity;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::ports::NotificationGateApi;

pub struct NotificationGateBusAdapter<G: NotificationGateApi> {
    bus: Arc<InMemoryEventBus>,
    gate: Arc<G>,
    jobs: Mutex<JobReceiver>,
}

impl<G: NotificationGateApi + 'static> NotificationGateBusAdapter<G> {
    pub fn new(bus: Arc<InMemoryEventBus>, gate: Arc<G>, jobs: JobReceiver) -> Self {
        Self {
            bus,
            gate,
            jobs: Mutex::new(jobs),
        }
    }

    /// Process jobs until `shutdown` turns true or its sender is dropped.
    pub async fn run(self: Arc<Self>, shutdown: watch::Receiver<bool>) {
        self.consume(shutdown).await;
    }

    /// [`Self::run`] on a background task.
    pub fn spawn(self: Arc<Self>, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.consume(shutdown).await })
    }

    async fn consume(&self, mut shutdown: watch::Receiver<bool>) {
        let mut jobs = self.jobs.lock().await;
        info!("[fb-04] Notification gate listening for comment jobs");

        loop {
            if *shutdown.borrow() {
                break;
            }
            tokio::select! {
                job = jobs.recv() => match job {
                    Some(job) => self.handle_job(job).await,
                    None => {
                        warn!("[fb-04] Job queue closed, notification gate stopping");
                        return;
                    }
                },
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        jobs.close();
        let mut drained = 0usize;
        while let Some(job) = jobs.recv().await {
            self.handle_job(job).await;
            drained += 1;
        }
        info!(drained, "[fb-04] Notification gate stopped");
    }

    pub async fn handle_job(&self, job: FederationJob) {
        let label = job.label();
        match job {
            FederationJob::CommentCreated(activity) => self.handle_comment(label, activity).await,
        }
    }

    async fn handle_comment(&self, job: String, activity: CommentActivity) {
        match self.gate.process(&activity).await {
            Ok(outcome) => {
                let delivered = outcome.delivered.len();
                let suppressed = outcome.suppressed.len();
                for notification in outcome.delivered {
                    self.bus
                        .publish(FederationEvent::NotificationCreated(notification))
                        .await;
                }
                for candidate in outcome.suppressed {
                    self.bus
                        .publish(FederationEvent::NotificationSuppressed {
                            recipient: candidate.recipient,
                            origin: candidate.origin,
                            kind: candidate.kind,
                            comment_id: candidate.comment_id,
                        })
                        .await;
                }
                self.bus
                    .publish(FederationEvent::JobCompleted {
                        subsystem_id: NOTIFICATION_GATE_ID,
                        job,
                        delivered,
                        suppressed,
                    })
                    .await;
            }
            Err(e) => {
                self.bus
                    .publish(FederationEvent::JobFailed {
                        subsystem_id: NOTIFICATION_GATE_ID,
                        job,
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    }
}
