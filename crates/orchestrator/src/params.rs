use serde::{Deserialize, Serialize};

use crate::error::{RunError, RunResult};

/// Parameters of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Number of rounds; the last one ends in meta-review instead of evolution
    pub rounds: u32,
    /// Hypotheses generated in the first round
    pub population: usize,
    /// Survivors carried into evolution each round
    pub keep_top: usize,
    /// Hypotheses surfaced in the final overview
    pub shortlist: usize,
    /// Base seed for tournament pairing
    pub seed: u64,
    /// Keep Elo ratings across rounds instead of resetting them every ranking
    pub carry_ratings: bool,
    /// Ground reflection in web lookups
    pub web_search: bool,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            rounds: 1,
            population: 2,
            keep_top: 2,
            shortlist: 2,
            seed: 0,
            carry_ratings: false,
            web_search: true,
        }
    }
}

impl RunParams {
    /// Reject parameters the round loop cannot work with.
    pub fn validate(&self) -> RunResult<()> {
        let checks = [
            ("rounds", self.rounds as usize),
            ("population", self.population),
            ("keep_top", self.keep_top),
            ("shortlist", self.shortlist),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(RunError::Config(format!("{} must be at least 1", name)));
            }
        }
        Ok(())
    }
}
