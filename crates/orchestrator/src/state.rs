use research_core::{Hypothesis, ResearchGoal, Review};
use std::collections::HashMap;
use tournament::{EloTracker, TournamentSummary};

use crate::params::RunParams;

/// Working set of a run, owned by the driver and handed to one phase at a time.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub goal: ResearchGoal,
    /// 0-based index of the current round
    pub round_index: u32,
    /// Active population, in order
    pub population: Vec<Hypothesis>,
    /// Reviews of the current population, keyed by hypothesis id
    pub reviews: HashMap<String, Review>,
    pub tournament: Option<TournamentSummary>,
    pub overview: Option<String>,
    pub params: RunParams,
    /// Rating store for the ranking phase; reset every round unless
    /// `params.carry_ratings` is set
    pub ratings: EloTracker,
    /// Number of completed phases that have mutated this state
    pub version: u64,
}

impl RoundState {
    pub fn new(goal: ResearchGoal, params: RunParams) -> Self {
        Self {
            goal,
            round_index: 0,
            population: Vec::new(),
            reviews: HashMap::new(),
            tournament: None,
            overview: None,
            params,
            ratings: EloTracker::new(),
            version: 0,
        }
    }
}
