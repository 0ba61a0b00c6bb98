use chrono::{DateTime, Utc};

use super::game::{Game, UNKNOWN_GAME};
use super::stream::StreamStatus;
use crate::utils::helper::watch_url;

/// An offline-to-live transition of the tracked broadcaster.
///
/// Emitted at most once per transition by the tracker; carries everything
/// the handlers need to announce the stream.
#[derive(Debug, Clone)]
pub struct LiveEvent {
    pub stream: StreamStatus,
    pub game: Option<Game>,
    pub detected_at: DateTime<Utc>,
}

impl LiveEvent {
    pub fn new(stream: StreamStatus, game: Option<Game>) -> Self {
        Self {
            stream,
            game,
            detected_at: Utc::now(),
        }
    }

    /// Game name with the lookup-miss fallback applied.
    pub fn game_name(&self) -> &str {
        self.game.as_ref().map(|g| g.name.as_str()).unwrap_or(UNKNOWN_GAME)
    }

    /// Format the announcement message for Discord
    pub fn format_for_discord(&self) -> String {
        format!(
            "@here {} just went live!\nPlaying {}\n{}\nWatch here: {}",
            self.stream.user_name,
            self.game_name(),
            self.stream.title,
            watch_url(&self.stream.user_name),
        )
    }
}
