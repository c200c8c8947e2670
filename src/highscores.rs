//! High score leaderboard
//!
//! Top 5 scores, highest first. Stored as a plain JSON list of integers.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<u64>,
}

impl HighScores {
    pub const STORAGE_KEY: &'static str = "brick_breaker_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from arbitrary scores, restoring order and cap
    pub fn from_scores(scores: impl IntoIterator<Item = u64>) -> Self {
        let mut entries: Vec<u64> = scores.into_iter().collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    /// Insert a finished match's score.
    /// Returns the rank achieved (1-indexed) or None if it fell off the board.
    pub fn record(&mut self, score: u64) -> Option<usize> {
        // Ties rank below existing entries
        let pos = self
            .entries
            .iter()
            .position(|&e| score > e)
            .unwrap_or(self.entries.len());
        if pos >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(pos, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    pub fn scores(&self) -> Vec<u64> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }

    /// Load from storage; a missing or unreadable list starts fresh
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let loaded: HighScores = persistence::load_or_default(store, Self::STORAGE_KEY);
        // Stored data may predate the cap or be hand-edited
        Self::from_scores(loaded.entries)
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> persistence::Result<()> {
        persistence::save_json(store, Self::STORAGE_KEY, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_record_orders_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(30), Some(1));
        assert_eq!(scores.record(50), Some(1));
        assert_eq!(scores.record(40), Some(2));
        assert_eq!(scores.scores(), vec![50, 40, 30]);
    }

    #[test]
    fn test_cap_at_five() {
        let mut scores = HighScores::from_scores([100, 90, 80, 70, 60]);
        assert_eq!(scores.record(50), None);
        assert_eq!(scores.record(60), None);
        assert_eq!(scores.record(85), Some(3));
        assert_eq!(scores.scores(), vec![100, 90, 85, 80, 70]);
    }

    #[test]
    fn test_zero_score_is_recorded() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(0), Some(1));
        assert_eq!(scores.top_score(), Some(0));
    }

    #[test]
    fn test_storage_format_is_plain_list() {
        let mut store = MemoryStore::new();
        HighScores::from_scores([20, 40]).save(&mut store).unwrap();
        assert_eq!(
            store.get(HighScores::STORAGE_KEY).unwrap().as_deref(),
            Some("[40,20]")
        );
    }

    #[test]
    fn test_load_normalizes() {
        let mut store = MemoryStore::new();
        store
            .set(HighScores::STORAGE_KEY, "[1,9,3,7,5,8,2]")
            .unwrap();
        let scores = HighScores::load(&store);
        assert_eq!(scores.scores(), vec![9, 8, 7, 5, 3]);
    }

    #[test]
    fn test_load_missing_or_corrupt_is_empty() {
        let mut store = MemoryStore::new();
        assert!(HighScores::load(&store).is_empty());
        store.set(HighScores::STORAGE_KEY, "oops").unwrap();
        assert!(HighScores::load(&store).is_empty());
    }

    proptest! {
        #[test]
        fn prop_sorted_and_capped(inserts in proptest::collection::vec(0u64..1000, 0..40)) {
            let mut scores = HighScores::new();
            for score in inserts {
                let rank = scores.record(score);
                let list = scores.scores();
                prop_assert!(list.len() <= MAX_HIGH_SCORES);
                prop_assert!(list.windows(2).all(|w| w[0] >= w[1]));
                if let Some(rank) = rank {
                    prop_assert_eq!(list[rank - 1], score);
                }
            }
        }
    }
}
