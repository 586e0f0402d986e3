use quiz_core::model::LeaderboardEntry;

/// How many board rows the results screen lists.
pub const RECENT_SHOWN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRowVm {
    pub name: String,
    pub score: i32,
    pub when: String,
}

/// Map the newest-first board to display rows, keeping at most `limit`.
#[must_use]
pub fn map_board_rows(entries: &[LeaderboardEntry], limit: usize) -> Vec<BoardRowVm> {
    entries
        .iter()
        .take(limit)
        .map(|entry| BoardRowVm {
            name: entry.name.clone(),
            score: entry.score,
            when: entry.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect()
}
