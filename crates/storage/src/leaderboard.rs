use std::sync::Arc;

use quiz_core::model::{push_capped, LeaderboardEntry};

use crate::repository::{KeyValueStore, StorageError};

/// Well-known key the whole board lives under, as one JSON array.
pub const LEADERBOARD_KEY: &str = "quizverse_leaderboard";

/// Newest-first leaderboard persisted as a single JSON blob.
///
/// Reads are forgiving: a missing or corrupt blob decodes to an empty board,
/// never an error. Writes are last-writer-wins; there is no cross-process
/// coordination for a single-user tool.
#[derive(Clone)]
pub struct LeaderboardStore {
    kv: Arc<dyn KeyValueStore>,
}

impl LeaderboardStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Prepend an entry, truncate to the cap, and write the board back.
    ///
    /// Returns the updated board.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend read/write failures; corrupt
    /// existing data is treated as an empty board.
    pub async fn append(
        &self,
        entry: LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let board = push_capped(self.read_all().await?, entry);
        let encoded = serde_json::to_string(&board)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.put(LEADERBOARD_KEY, &encoded).await?;
        Ok(board)
    }

    /// Read the first `n` entries (the board is already newest-first).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend read failures.
    pub async fn read_top(&self, n: usize) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let mut board = self.read_all().await?;
        board.truncate(n);
        Ok(board)
    }

    async fn read_all(&self) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let Some(raw) = self.kv.get(LEADERBOARD_KEY).await? else {
            return Ok(Vec::new());
        };
        // Corrupt data is silently an empty board.
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::LEADERBOARD_CAP;
    use quiz_core::time::fixed_now;

    use crate::repository::InMemoryKvStore;

    fn store() -> (LeaderboardStore, Arc<InMemoryKvStore>) {
        let kv = Arc::new(InMemoryKvStore::new());
        (LeaderboardStore::new(kv.clone()), kv)
    }

    fn entry(name: &str, score: i32) -> LeaderboardEntry {
        LeaderboardEntry::new(name, score, fixed_now())
    }

    #[tokio::test]
    async fn append_prepends_and_persists() {
        let (board, _kv) = store();
        board.append(entry("first", 2)).await.unwrap();
        let after = board.append(entry("second", -4)).await.unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after[0].name, "second");

        let top = board.read_top(1).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "second");
        assert_eq!(top[0].score, -4);
    }

    #[tokio::test]
    async fn append_caps_the_board() {
        let (board, _kv) = store();
        for i in 0..=LEADERBOARD_CAP {
            board.append(entry(&format!("p{i}"), i as i32)).await.unwrap();
        }
        let all = board.read_top(LEADERBOARD_CAP + 10).await.unwrap();
        assert_eq!(all.len(), LEADERBOARD_CAP);
        assert_eq!(all[0].name, format!("p{LEADERBOARD_CAP}"));
    }

    #[tokio::test]
    async fn corrupt_blob_reads_as_empty() {
        let (board, kv) = store();
        kv.put(LEADERBOARD_KEY, "not json at all").await.unwrap();

        assert!(board.read_top(10).await.unwrap().is_empty());

        // Appending over corrupt data starts a fresh board.
        let after = board.append(entry("fresh", 6)).await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].name, "fresh");
    }

    #[tokio::test]
    async fn missing_blob_reads_as_empty() {
        let (board, _kv) = store();
        assert!(board.read_top(10).await.unwrap().is_empty());
    }
}
