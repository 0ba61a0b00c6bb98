//! Live-state tracking

pub mod live_tracker;

// Re-export for convenience
pub use live_tracker::{LiveTracker, TrackerState};
