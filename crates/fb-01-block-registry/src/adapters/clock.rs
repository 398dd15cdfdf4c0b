//! Deterministic clock for replaying scenarios.

use std::sync::atomic::{AtomicU64, Ordering};

use shared_types::Timestamp;

use crate::ports::TimeSource;

/// Returns `start`, `start + step`, `start + 2 * step`, ... on successive calls.
pub struct SteppingTimeSource {
    next: AtomicU64,
    step: u64,
}

impl SteppingTimeSource {
    pub fn new(start: Timestamp, step: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
            step,
        }
    }
}

impl TimeSource for SteppingTimeSource {
    fn now(&self) -> Timestamp {
        self.next.fetch_add(self.step, Ordering::Relaxed)
    }
}
