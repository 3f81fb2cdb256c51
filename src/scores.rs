//! Survival-time leaderboard
//!
//! An ordered, size-capped list of past run durations in seconds, best first.
//! Persisted as plain JSON under a namespaced key; a missing or malformed
//! value reads back as an empty list, never an error.

use crate::config::Config;
use crate::storage::KeyValueStore;

/// Storage key for the serialized score list.
const STORAGE_KEY: &str = "rockstorm.scores";

/// Ranked run durations, descending, capped at the configured maximum.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    entries: Vec<f64>,
    max_entries: usize,
}

impl ScoreStore {
    /// Create an empty leaderboard.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Insert a completed run's duration, keeping descending order. A tie
    /// lands after the existing equal entries. Anything pushed past the cap
    /// is evicted.
    pub fn add(&mut self, duration_secs: f64) {
        let pos = self
            .entries
            .iter()
            .position(|&existing| duration_secs > existing)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, duration_secs);
        self.entries.truncate(self.max_entries);
    }

    /// Longest survival so far.
    pub fn best(&self) -> Option<f64> {
        self.entries.first().copied()
    }

    /// Ranked durations, best first.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the leaderboard from the host's store. Missing or unparseable
    /// data is treated as "no scores yet".
    pub fn load(store: &impl KeyValueStore, config: &Config) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Some(json) => match serde_json::from_str::<Vec<f64>>(&json) {
                Ok(list) => {
                    log::info!("loaded {} scores", list.len());
                    list
                }
                Err(err) => {
                    log::warn!("score data unreadable, starting fresh: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let mut scores = Self::new(config.max_scores);
        scores.entries = entries;
        scores.entries.truncate(scores.max_entries);
        scores
    }

    /// Persist the leaderboard, best-effort. Serialization of finite floats
    /// cannot fail; storage failures are the store's problem to swallow.
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => store.set(STORAGE_KEY, &json),
            Err(err) => log::warn!("score save skipped: {err}"),
        }
    }
}
