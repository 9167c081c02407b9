//! Drives a run through the phase state machine.

use research_core::Collaborators;
use tracing::{info, info_span, Instrument};

use crate::error::{RunError, RunResult};
use crate::machine::{Phase, RunTrace};
use crate::phases;
use crate::state::RoundState;

/// Final state of a completed run plus the phases it visited
#[derive(Debug)]
pub struct RunOutcome {
    pub state: RoundState,
    pub trace: RunTrace,
}

/// Sequences phases strictly one after another over a single owned state.
pub struct Orchestrator {
    collaborators: Collaborators,
}

impl Orchestrator {
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    /// Run from `Generate` until `End`.
    ///
    /// The first collaborator failure aborts the run; the error names the phase.
    pub async fn run(&self, mut state: RoundState) -> RunResult<RunOutcome> {
        state.params.validate()?;
        info!(
            "Starting run: rounds={}, population={}, keep_top={}, shortlist={}, seed={}",
            state.params.rounds,
            state.params.population,
            state.params.keep_top,
            state.params.shortlist,
            state.params.seed
        );

        let mut trace = RunTrace::default();
        let mut phase = Phase::START;
        while !phase.is_terminal() {
            let span = info_span!("phase", name = %phase, round = state.round_index);
            self.execute(phase, &mut state).instrument(span).await?;
            state.version += 1;
            trace.record(phase);
            phase = phase.next(state.round_index, state.params.rounds);
        }

        info!("Run complete after {} phases", trace.phases.len());
        Ok(RunOutcome { state, trace })
    }

    async fn execute(&self, phase: Phase, state: &mut RoundState) -> RunResult<()> {
        let c = &self.collaborators;
        let result = match phase {
            Phase::Generate => phases::generate(state, c).await,
            Phase::Reflect => phases::reflect(state, c).await,
            Phase::Rank => phases::rank(state, c).await,
            Phase::Proximity => phases::proximity(state, c).await,
            Phase::Evolve => phases::evolve(state, c).await,
            Phase::MetaReview => phases::meta_review(state, c).await,
            Phase::End => Ok(()),
        };
        result.map_err(|source| RunError::Collaborator { phase, source })
    }
}
