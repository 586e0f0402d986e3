#![forbid(unsafe_code)]

pub mod leaderboard;
pub mod repository;
pub mod sqlite;

pub use leaderboard::{LeaderboardStore, LEADERBOARD_KEY};
pub use repository::{InMemoryKvStore, KeyValueStore, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
