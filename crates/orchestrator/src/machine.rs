//! Phase state machine for a run
//!
//! ```text
//! Generate -> Reflect -> Rank -> Proximity -+-> Evolve -> Reflect ...
//!                                           |
//!                                           +-> MetaReview -> End
//! ```
//!
//! The only branch is taken when leaving `Proximity`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Generate,
    Reflect,
    Rank,
    Proximity,
    Evolve,
    MetaReview,
    End,
}

impl Phase {
    /// Entry point of every run
    pub const START: Phase = Phase::Generate;

    /// Transition table.
    ///
    /// `round_index` is the 0-based index of the round that just finished its
    /// proximity step; `rounds` is the configured number of rounds.
    pub fn next(self, round_index: u32, rounds: u32) -> Phase {
        match self {
            Phase::Generate => Phase::Reflect,
            Phase::Reflect => Phase::Rank,
            Phase::Rank => Phase::Proximity,
            Phase::Proximity if is_final_round(round_index, rounds) => Phase::MetaReview,
            Phase::Proximity => Phase::Evolve,
            Phase::Evolve => Phase::Reflect,
            Phase::MetaReview | Phase::End => Phase::End,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::End
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Generate => "generate",
            Phase::Reflect => "reflect",
            Phase::Rank => "rank",
            Phase::Proximity => "proximity",
            Phase::Evolve => "evolve",
            Phase::MetaReview => "meta_review",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

/// True once the round at `round_index` completes the configured count.
pub fn is_final_round(round_index: u32, rounds: u32) -> bool {
    round_index.saturating_add(1) >= rounds
}

/// Phases visited by a run, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTrace {
    pub phases: Vec<Phase>,
}

impl RunTrace {
    pub fn record(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    pub fn count(&self, phase: Phase) -> usize {
        self.phases.iter().filter(|&&p| p == phase).count()
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod machine_tests;
