use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::utils::helper::truncate_string;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

// Discord rejects message bodies above this length.
const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(default)]
    name: Option<String>,
}

/// Discord REST notifier for a single destination channel
#[derive(Clone)]
pub struct DiscordNotifier {
    client: Client,
    token: String,
    channel_id: u64,
}

impl DiscordNotifier {
    pub fn new(token: String, channel_id: u64) -> Self {
        Self {
            client: Client::new(),
            token,
            channel_id,
        }
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }

    /// Confirm the destination channel exists and return its name.
    ///
    /// Runs once at startup, before the poll loop; a channel the bot cannot
    /// see makes every later delivery pointless, so failure here is fatal.
    pub async fn verify_channel(&self) -> anyhow::Result<String> {
        let url = format!("{}/channels/{}", DISCORD_API_BASE, self.channel_id);

        let channel: Channel = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .context("Discord channel lookup request failed")?
            .error_for_status()
            .with_context(|| format!("Discord channel {} is not accessible", self.channel_id))?
            .json()
            .await
            .context("malformed Discord channel response")?;

        Ok(channel.name.unwrap_or_else(|| self.channel_id.to_string()))
    }

    /// Send a plain-text message to the configured channel
    pub async fn send_message(&self, content: &str) {
        let url = format!("{}/channels/{}/messages", DISCORD_API_BASE, self.channel_id);

        let payload = serde_json::json!({
            "content": truncate_string(content, MAX_MESSAGE_LEN),
        });

        match self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => {
                let response_status = response.status();
                if !response_status.is_success() {
                    warn!("Discord API error: Status {}", response_status);
                    if let Ok(text) = response.text().await {
                        warn!("Discord API response: {}", text);
                    }
                } else {
                    debug!("Discord notification sent successfully");
                }
            }
            Err(e) => {
                warn!("Failed to send Discord notification: {}", e);
            }
        }
    }
}
