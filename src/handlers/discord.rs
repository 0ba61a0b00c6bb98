use async_trait::async_trait;
use tracing::{debug, info};

use crate::discord_notifier::DiscordNotifier;
use crate::models::event::LiveEvent;
use crate::traits::event_handler::LiveEventHandler;

/// Discord notification event handler
pub struct DiscordEventHandler {
    notifier: DiscordNotifier,
}

impl DiscordEventHandler {
    /// Create a new Discord event handler
    pub fn new(notifier: DiscordNotifier) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl LiveEventHandler for DiscordEventHandler {
    async fn handle_live_event(&self, event: &LiveEvent) {
        info!("Notifying Discord that {} went live", event.stream.user_name);
        self.notifier.send_message(&event.format_for_discord()).await;
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        // Poll failures stay out of chat; the console handler logs them.
        debug!("Skipping Discord delivery for failed poll: {}", error);
    }
}
