//! In-memory notification sink and feed
//!
//! The feed returns what was persisted. It never re-checks blocklists:
//! a notification suppressed at generation time stays absent after an
//! unblock, and one delivered earlier stays present after a block.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{AccountId, Notification, Page, PageRequest};

use crate::error::GateError;
use crate::ports::NotificationSink;

#[derive(Default)]
pub struct InMemoryNotificationSink {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications of `recipient`, newest first.
    pub fn feed(&self, recipient: &AccountId, page: PageRequest) -> Page<Notification> {
        let mut mine: Vec<Notification> = self
            .notifications
            .read()
            .iter()
            .filter(|n| &n.recipient == recipient)
            .cloned()
            .collect();
        mine.reverse();
        page.apply(mine)
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.read().clone()
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn persist(&self, notifications: Vec<Notification>) -> Result<(), GateError> {
        self.notifications.write().extend(notifications);
        Ok(())
    }
}
