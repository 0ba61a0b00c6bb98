//! Event handlers for live transitions

pub mod console;
pub mod discord;
pub mod composite;

// Re-export for convenience
pub use console::ConsoleEventHandler;
pub use discord::DiscordEventHandler;
pub use composite::CompositeEventHandler;
