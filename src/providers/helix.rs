use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::models::game::Game;
use crate::models::stream::StreamStatus;
use crate::traits::stream_provider::StreamDataProvider;

const HELIX_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Per-request cap so a stalled call cannot outlive the poll interval.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Every Helix list endpoint wraps its records in a `data` array; an empty
/// array is the no-match / offline answer, not an error.
#[derive(Debug, Deserialize)]
struct HelixResponse<T> {
    data: Vec<T>,
}

/// A Helix user record, only needed for login-to-id resolution.
#[derive(Debug, Deserialize)]
struct User {
    id: String,
}

/// Helix-based data provider (polling approach)
pub struct HelixDataProvider {
    client: Client,
    client_id: String,
    game_cache: DashMap<String, Game>,
}

impl HelixDataProvider {
    /// Create a new Helix data provider
    pub fn new(client_id: String) -> Self {
        Self {
            client: Client::new(),
            client_id,
            game_cache: DashMap::new(),
        }
    }

    /// GET a Helix list endpoint and return the first record, if any
    async fn fetch_first<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> anyhow::Result<Option<T>> {
        let url = format!("{}/{}", HELIX_BASE_URL, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Client-ID", &self.client_id)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("request to {} failed", path))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", path))?;

        let body: HelixResponse<T> = response
            .json()
            .await
            .with_context(|| format!("malformed {} response", path))?;

        Ok(body.data.into_iter().next())
    }
}

#[async_trait]
impl StreamDataProvider for HelixDataProvider {
    async fn fetch_stream(&self, user_id: &str) -> anyhow::Result<Option<StreamStatus>> {
        self.fetch_first("streams", &[("user_id", user_id)]).await
    }

    async fn fetch_game(&self, game_id: &str) -> anyhow::Result<Option<Game>> {
        // Check local cache first
        if let Some(entry) = self.game_cache.get(game_id) {
            return Ok(Some(entry.value().clone()));
        }

        let game: Option<Game> = self.fetch_first("games", &[("id", game_id)]).await?;

        if let Some(game) = &game {
            debug!("Caching game name for {}: {}", game.id, game.name);
            self.game_cache.insert(game.id.clone(), game.clone());
        }

        Ok(game)
    }

    async fn resolve_user(&self, login: &str) -> anyhow::Result<Option<String>> {
        let user: Option<User> = self.fetch_first("users", &[("login", login)]).await?;
        Ok(user.map(|u| u.id))
    }
}
