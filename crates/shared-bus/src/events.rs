//! # Federation Events
//!
//! Every event that flows through the shared bus.

use serde::{Deserialize, Serialize};
use shared_types::{AccountId, CommentId, Notification, NotificationKind};

/// Subsystem id of the notification gate.
pub const NOTIFICATION_GATE_ID: u8 = 4;

/// All events that can be published to the event bus.
///
/// Jobs themselves travel over the [`crate::queue`]; the bus only carries
/// what happened to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FederationEvent {
    // =========================================================================
    // SUBSYSTEM 4: NOTIFICATION GATE
    // =========================================================================
    /// A notification passed the gate and was persisted.
    NotificationCreated(Notification),

    /// A notification was dropped because its origin is blocked for the recipient.
    NotificationSuppressed {
        recipient: AccountId,
        origin: AccountId,
        kind: NotificationKind,
        comment_id: CommentId,
    },

    // =========================================================================
    // JOB OUTCOMES
    // =========================================================================
    /// A background job finished. Published for every successful job, also
    /// when it produced no notification at all.
    JobCompleted {
        /// The subsystem that ran the job.
        subsystem_id: u8,
        /// Job label, see `FederationJob::label`.
        job: String,
        /// Notifications persisted.
        delivered: usize,
        /// Candidates dropped by the gate.
        suppressed: usize,
    },

    /// A background job failed and was not retried.
    JobFailed {
        /// The subsystem that ran the job.
        subsystem_id: u8,
        /// Job label, see `FederationJob::label`.
        job: String,
        /// Error description.
        error: String,
    },
}

impl FederationEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::NotificationCreated(_) | Self::NotificationSuppressed { .. } => {
                EventTopic::Notifications
            }
            Self::JobCompleted { .. } => EventTopic::Jobs,
            Self::JobFailed { .. } => EventTopic::DeadLetterQueue,
        }
    }

    /// Get the originating subsystem ID.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self {
            Self::NotificationCreated(_) | Self::NotificationSuppressed { .. } => {
                NOTIFICATION_GATE_ID
            }
            Self::JobCompleted { subsystem_id, .. } | Self::JobFailed { subsystem_id, .. } => {
                *subsystem_id
            }
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Notification gate outcomes.
    Notifications,
    /// Completed jobs.
    Jobs,
    /// Failed jobs.
    DeadLetterQueue,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Source subsystems to include. Empty means all sources.
    pub source_subsystems: Vec<u8>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            source_subsystems: Vec::new(),
        }
    }

    /// Create a filter for events from specific subsystems.
    #[must_use]
    pub fn from_subsystems(subsystems: Vec<u8>) -> Self {
        Self {
            topics: Vec::new(),
            source_subsystems: subsystems,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &FederationEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.source_subsystems.is_empty()
            || self.source_subsystems.contains(&event.source_subsystem());

        topic_match && source_match
    }
}
