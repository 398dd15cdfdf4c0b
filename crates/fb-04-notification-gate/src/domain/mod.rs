//! Domain Layer

pub mod gate;
pub mod mentions;
pub mod planner;

pub use gate::NotificationGate;
pub use mentions::extract_mentions;
pub use planner::{NotificationCandidate, NotificationPlanner};
