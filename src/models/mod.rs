//! Data models for the live notifier

pub mod stream;
pub mod game;
pub mod event;

// Re-export for convenience
pub use stream::StreamStatus;
pub use game::Game;
pub use event::LiveEvent;
