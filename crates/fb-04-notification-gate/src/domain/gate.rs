//! The gate decision
//!
//! A candidate is suppressed iff its origin account, or the server hosting
//! it, is blocked in the recipient's effective block set. Only the
//! recipient's set matters.

use shared_types::EffectiveBlockSet;

use super::planner::NotificationCandidate;

pub struct NotificationGate;

impl NotificationGate {
    pub fn should_suppress(candidate: &NotificationCandidate, recipient_set: &EffectiveBlockSet) -> bool {
        recipient_set.is_blocked(&candidate.origin)
    }
}
