use async_trait::async_trait;

use crate::models::game::Game;
use crate::models::stream::StreamStatus;

/// Core trait for querying the streaming platform
#[async_trait]
pub trait StreamDataProvider: Send + Sync {
    /// Fetch the current stream record for a broadcaster; `None` means offline
    async fn fetch_stream(&self, user_id: &str) -> anyhow::Result<Option<StreamStatus>>;

    /// Look up a game (category) by id; `None` when the platform has no match
    async fn fetch_game(&self, game_id: &str) -> anyhow::Result<Option<Game>>;

    /// Resolve a login handle to the stable numeric user id
    async fn resolve_user(&self, login: &str) -> anyhow::Result<Option<String>>;
}
