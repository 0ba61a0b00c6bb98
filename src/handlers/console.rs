use async_trait::async_trait;
use tracing::{error, info};

use crate::models::event::LiveEvent;
use crate::traits::event_handler::LiveEventHandler;
use crate::utils::helper::watch_url;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiveEventHandler for ConsoleEventHandler {
    async fn handle_live_event(&self, event: &LiveEvent) {
        info!("Stream went live!");
        info!("  Broadcaster: {}", event.stream.user_name);
        info!("  Playing: {}", event.game_name());
        info!("  Title: {}", event.stream.title);
        info!("  Watch: {}", watch_url(&event.stream.user_name));
        info!(
            "  Detected at: {}",
            event.detected_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        error!("Poll cycle failed: {:#}", error);
    }
}
