//! Twitch Live Notifier Library
//!
//! A modular stream-status tracker that polls the Twitch Helix API and
//! announces offline-to-live transitions in a Discord channel.

// Public modules - these are the API surface
pub mod config;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod tracker;
pub mod utils;
pub mod discord_notifier;

// Re-export commonly used items for easier access
pub use config::Config;
pub use models::{
    stream::StreamStatus,
    game::Game,
    event::LiveEvent,
};
pub use traits::{
    stream_provider::StreamDataProvider,
    event_handler::LiveEventHandler,
};
pub use providers::helix::HelixDataProvider;
pub use handlers::{
    console::ConsoleEventHandler,
    discord::DiscordEventHandler,
    composite::CompositeEventHandler,
};
pub use tracker::live_tracker::{LiveTracker, TrackerState};
pub use discord_notifier::DiscordNotifier;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
