use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of persisted leaderboard entries.
pub const LEADERBOARD_CAP: usize = 50;

/// One completed quiz run, persisted newest-first.
///
/// The serialized field names (`name`/`score`/`date`) match the on-disk blob
/// written by earlier releases, so existing boards keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i32,
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, score: i32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            score,
            recorded_at,
        }
    }
}

/// Append an entry newest-first: prepend, then truncate to the cap.
#[must_use]
pub fn push_capped(mut board: Vec<LeaderboardEntry>, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    board.insert(0, entry);
    board.truncate(LEADERBOARD_CAP);
    board
}
