//! Counters for the notification pipeline

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct GateMetrics {
    /// Candidates produced by the planner
    pub planned: AtomicU64,
    /// Notifications persisted
    pub delivered: AtomicU64,
    /// Candidates dropped by the gate
    pub suppressed: AtomicU64,
    /// Activities whose processing failed
    pub failed: AtomicU64,
}

impl GateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_planned(&self, count: usize) {
        self.planned.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_delivered(&self, count: usize) {
        self.delivered.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_suppressed(&self, count: usize) {
        self.suppressed.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> GateMetricsSnapshot {
        GateMetricsSnapshot {
            planned: self.planned.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateMetricsSnapshot {
    pub planned: u64,
    pub delivered: u64,
    pub suppressed: u64,
    pub failed: u64,
}
