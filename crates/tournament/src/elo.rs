//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default starting Elo for hypotheses not yet rated
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 24.0;

/// Elo rating store keyed by hypothesis id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloTracker {
    /// Sensitivity of each update
    pub k: f64,
    /// Ratings for each hypothesis seen so far
    pub ratings: HashMap<String, f64>,
}

/// Rating movement produced by one decided match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingDelta {
    pub winner: f64,
    pub loser: f64,
}

impl Default for EloTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EloTracker {
    pub fn new() -> Self {
        Self::with_k(K_FACTOR)
    }

    pub fn with_k(k: f64) -> Self {
        Self {
            k,
            ratings: HashMap::new(),
        }
    }

    /// Current rating, or the default for an unseen id. Never inserts.
    pub fn rating(&self, id: &str) -> f64 {
        self.ratings.get(id).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Expected score of `a` against `b`
    pub fn expected_score(&self, a: &str, b: &str) -> f64 {
        let ra = self.rating(a);
        let rb = self.rating(b);
        1.0 / (1.0 + 10.0_f64.powf((rb - ra) / 400.0))
    }

    /// Apply one decided match. Call exactly once per match.
    pub fn update(&mut self, winner: &str, loser: &str) -> RatingDelta {
        let expected_winner = self.expected_score(winner, loser);
        let delta = RatingDelta {
            winner: self.k * (1.0 - expected_winner),
            loser: self.k * (0.0 - (1.0 - expected_winner)),
        };

        let rw = self.rating(winner);
        let rl = self.rating(loser);
        self.ratings.insert(winner.to_string(), rw + delta.winner);
        self.ratings.insert(loser.to_string(), rl + delta.loser);

        delta
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
