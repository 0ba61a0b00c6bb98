use serde::Deserialize;

/// A single Helix stream record, as returned by `GET helix/streams`.
///
/// The endpoint returns an empty `data` array when the broadcaster is
/// offline, so a missing record is the offline signal rather than a field
/// on this struct.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamStatus {
    #[serde(default)]
    pub user_id: String,
    pub user_name: String,
    /// "live" for an ongoing broadcast; anything else counts as offline.
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    /// May be empty when Twitch has no category for the stream.
    #[serde(default)]
    pub game_id: String,
}

impl StreamStatus {
    pub fn is_live(&self) -> bool {
        self.stream_type == "live"
    }
}
