//! Cumulative game statistics
//!
//! Stats are updated exactly once per session termination and persisted
//! after every update. Loading tolerates a missing or malformed blob by
//! falling back to zeroed stats: losing a corrupt stats file must never
//! block gameplay.

use crate::game::MAX_ATTEMPTS;
use crate::storage::{KvStore, STATS_KEY};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Cumulative win/loss counters and the guess distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins indexed by attempts used minus one
    pub distribution: [u32; MAX_ATTEMPTS],
}

impl Stats {
    /// Percentage of games won, rounded to the nearest integer
    ///
    /// # Examples
    /// ```
    /// use lemot::stats::Stats;
    ///
    /// let stats = Stats { games_played: 3, games_won: 2, ..Stats::default() };
    /// assert_eq!(stats.win_percentage(), 67);
    /// assert_eq!(Stats::default().win_percentage(), 0);
    /// ```
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }
}

/// Records session outcomes and persists them through a key-value store
pub struct StatsTracker<S: KvStore> {
    stats: Stats,
    store: S,
}

impl<S: KvStore> StatsTracker<S> {
    /// Load stats from the store
    ///
    /// A missing blob starts fresh; a malformed blob is logged and replaced
    /// by zeroed stats rather than surfaced to the caller.
    pub fn load(store: S) -> Self {
        let stats = match store.get(STATS_KEY) {
            None => Stats::default(),
            Some(blob) => serde_json::from_str(&blob).unwrap_or_else(|err| {
                warn!("discarding malformed stats blob: {err}");
                Stats::default()
            }),
        };

        Self { stats, store }
    }

    /// Current statistics
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Record one session outcome and persist
    ///
    /// A win extends the streak and credits the distribution bucket for
    /// `attempts_used`; a loss resets the streak. Save failures are logged
    /// and never propagated to gameplay.
    pub fn record_outcome(&mut self, won: bool, attempts_used: usize) {
        self.stats.games_played += 1;

        if won {
            self.stats.games_won += 1;
            self.stats.current_streak += 1;
            self.stats.max_streak = self.stats.max_streak.max(self.stats.current_streak);
            if let Some(bucket) = attempts_used
                .checked_sub(1)
                .and_then(|i| self.stats.distribution.get_mut(i))
            {
                *bucket += 1;
            }
        } else {
            self.stats.current_streak = 0;
        }

        self.save();
    }

    fn save(&mut self) {
        match serde_json::to_string(&self.stats) {
            Ok(blob) => {
                if let Err(err) = self.store.set(STATS_KEY, &blob) {
                    warn!("failed to persist stats: {err}");
                }
            }
            Err(err) => warn!("failed to serialize stats: {err}"),
        }
    }
}
