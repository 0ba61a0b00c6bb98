//! Core traits for the live notifier

pub mod stream_provider;
pub mod event_handler;

// Re-export for convenience
pub use stream_provider::StreamDataProvider;
pub use event_handler::LiveEventHandler;
