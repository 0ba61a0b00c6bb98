use async_trait::async_trait;

use crate::models::event::LiveEvent;

/// Handler for live-transition events
#[async_trait]
pub trait LiveEventHandler: Send + Sync {
    /// Called once per offline-to-live transition
    async fn handle_live_event(&self, event: &LiveEvent);

    /// Handle a failed poll cycle - using reference to avoid cloning issues
    async fn handle_error(&self, error: &anyhow::Error);
}
