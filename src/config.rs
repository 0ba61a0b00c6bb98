use std::time::Duration;

use anyhow::{bail, Context};
use tracing::error;

use crate::traits::stream_provider::StreamDataProvider;

/// Default polling cadence in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Validated runtime configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_channel_id: u64,
    pub twitch_client_id: String,
    pub twitch_user_id: Option<String>,
    pub twitch_user_login: Option<String>,
    pub poll_interval: Duration,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an injected key lookup.
    ///
    /// Every missing required key is logged by name before the call fails,
    /// so a misconfigured deployment reports all problems at once.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let discord_token = get("DISCORD_TOKEN");
        let discord_channel = get("DISCORD_CHANNEL");
        let twitch_client_id = get("TWITCH_CLIENT_ID");
        let twitch_user_id = get("TWITCH_USER_ID");
        let twitch_user_login = get("TWITCH_USER_LOGIN");

        let mut missing = Vec::new();
        if discord_token.is_none() {
            missing.push("DISCORD_TOKEN");
        }
        if discord_channel.is_none() {
            missing.push("DISCORD_CHANNEL");
        }
        if twitch_client_id.is_none() {
            missing.push("TWITCH_CLIENT_ID");
        }
        if twitch_user_id.is_none() && twitch_user_login.is_none() {
            missing.push("TWITCH_USER_ID or TWITCH_USER_LOGIN");
        }

        for key in &missing {
            error!("Missing required configuration: {}", key);
        }
        if !missing.is_empty() {
            bail!("missing required configuration: {}", missing.join(", "));
        }

        let discord_channel = discord_channel.unwrap_or_default();
        let discord_channel_id = match discord_channel.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                error!("DISCORD_CHANNEL is not a valid channel id: {}", discord_channel);
                bail!("DISCORD_CHANNEL must be a numeric channel id");
            }
        };

        let poll_interval_secs = get("POLL_INTERVAL_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Ok(Self {
            discord_token: discord_token.unwrap_or_default(),
            discord_channel_id,
            twitch_client_id: twitch_client_id.unwrap_or_default(),
            twitch_user_id,
            twitch_user_login,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }

    /// Determine the broadcaster id to track.
    ///
    /// A configured numeric id is used as-is; only when it is absent is the
    /// login handle resolved through the platform. Resolution failure is
    /// fatal to startup.
    pub async fn resolve_broadcaster_id(
        &self,
        provider: &dyn StreamDataProvider,
    ) -> anyhow::Result<String> {
        if let Some(id) = &self.twitch_user_id {
            return Ok(id.clone());
        }

        let login = self
            .twitch_user_login
            .as_ref()
            .context("no broadcaster id or login configured")?;

        provider
            .resolve_user(login)
            .await
            .with_context(|| format!("failed to look up Twitch user {}", login))?
            .with_context(|| format!("no Twitch account matches login {}", login))
    }
}
