//! # Shared Bus - Job Queue and Event Bus
//!
//! Background work in Fedblock (a comment received from a remote instance,
//! a local comment that may trigger notifications) is submitted to a bounded
//! job queue and consumed by one worker. What the worker did is broadcast on
//! the event bus, where any number of subscribers can watch it.
//!
//! ```text
//! ┌──────────────┐   submit()    ┌───────────────────┐
//! │ Federation   │ ────────────→ │ Notification Gate │
//! │ inbox / API  │   job queue   │      worker       │
//! └──────────────┘               └───────────────────┘
//!                                          │ publish()
//!                                          ▼
//!                                  ┌──────────────┐
//!                                  │  Event Bus   │ ──→ subscribe()
//!                                  └──────────────┘
//! ```
//!
//! Every job ends with `JobCompleted` or, on the dead-letter topic,
//! `JobFailed`.

#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod queue;
pub mod subscriber;

pub use events::{EventFilter, EventTopic, FederationEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use queue::{
    job_queue, FederationJob, JobReceiver, JobSender, QueueError, DEFAULT_JOB_QUEUE_CAPACITY,
};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
