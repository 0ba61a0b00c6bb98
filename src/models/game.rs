use serde::Deserialize;

/// A Helix game (category) record, as returned by `GET helix/games`.
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
}

/// Sentinel game name used when the category lookup finds no match.
pub const UNKNOWN_GAME: &str = "unknown";
