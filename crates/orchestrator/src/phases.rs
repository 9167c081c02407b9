//! The six phases of a round. Each one reads and mutates the round state in
//! place; an `Err` from a collaborator aborts the phase as-is.

use research_core::{blend, top_by_score, CollaboratorError, Collaborators};
use std::collections::HashMap;
use tournament::{EloTracker, TournamentRunner};
use tracing::{debug, info};

use crate::state::RoundState;

type PhaseResult = Result<(), CollaboratorError>;

/// Upper bound of a proximity judgment
const MAX_PROXIMITY: u32 = 100;

/// Replace the population with freshly generated hypotheses.
pub async fn generate(state: &mut RoundState, collaborators: &Collaborators) -> PhaseResult {
    let size = state.params.population;
    info!("Generating initial population of size {}", size);

    let mut population = Vec::with_capacity(size);
    for i in 0..size {
        debug!("Generating hypothesis {}/{}", i + 1, size);
        let hypothesis = collaborators
            .generator
            .generate(&state.goal, state.round_index)
            .await?;
        population.push(hypothesis);
    }
    state.population = population;

    info!(
        "Generated {} hypotheses in round {}",
        state.population.len(),
        state.round_index
    );
    Ok(())
}

/// Review every hypothesis; the previous round's reviews are discarded.
pub async fn reflect(state: &mut RoundState, collaborators: &Collaborators) -> PhaseResult {
    info!("Reflecting on {} hypotheses", state.population.len());

    let mut reviews = HashMap::with_capacity(state.population.len());
    for hypothesis in &state.population {
        debug!("Reviewing hypothesis {}", hypothesis.short_id());
        let review = collaborators.reflector.reflect(&state.goal, hypothesis).await?;
        reviews.insert(hypothesis.id.clone(), review);
    }
    state.reviews = reviews;

    info!("Completed {} reviews", state.reviews.len());
    Ok(())
}

/// Run the pairwise tournament over the whole population.
pub async fn rank(state: &mut RoundState, collaborators: &Collaborators) -> PhaseResult {
    if !state.params.carry_ratings {
        state.ratings = EloTracker::new();
    }
    info!("Running tournament with seed {}", state.params.seed);

    let runner = TournamentRunner::new(collaborators.judge.clone());
    let summary = runner
        .run(
            &mut state.ratings,
            &mut state.population,
            &state.goal,
            state.round_index,
            state.params.seed,
        )
        .await;
    state.tournament = Some(summary);
    Ok(())
}

/// Blend each score with a fresh goal-proximity judgment.
pub async fn proximity(state: &mut RoundState, collaborators: &Collaborators) -> PhaseResult {
    info!("Starting proximity analysis");
    for hypothesis in state.population.iter_mut() {
        let proximity = collaborators
            .proximity
            .proximity(&state.goal, hypothesis)
            .await?
            .min(MAX_PROXIMITY);
        let previous = hypothesis.score;
        hypothesis.score = blend(previous, f64::from(proximity));
        debug!(
            "Hypothesis {}: score adjusted from {:.1} to {:.1}",
            hypothesis.short_id(),
            previous,
            hypothesis.score
        );
    }
    info!("Proximity analysis complete");
    Ok(())
}

/// Keep the best hypotheses, add their variants and advance the round.
pub async fn evolve(state: &mut RoundState, collaborators: &Collaborators) -> PhaseResult {
    let keep_top = state.params.keep_top;
    let winners = top_by_score(&state.population, keep_top);
    info!("Selected {} winners for evolution", winners.len());

    let patterns = state
        .tournament
        .as_ref()
        .map(|t| t.patterns.clone())
        .unwrap_or_default();

    let mut variants = Vec::new();
    for winner in &winners {
        let new_variants = collaborators.evolver.evolve(winner, &patterns).await?;
        debug!(
            "Generated {} variants from hypothesis {}",
            new_variants.len(),
            winner.short_id()
        );
        variants.extend(new_variants);
    }

    state.population = winners;
    state.population.extend(variants);
    state.round_index += 1;

    info!(
        "Evolution complete. New population size: {}",
        state.population.len()
    );
    Ok(())
}

/// Synthesize the overview from the shortlist.
pub async fn meta_review(state: &mut RoundState, collaborators: &Collaborators) -> PhaseResult {
    let shortlist = top_by_score(&state.population, state.params.shortlist);
    info!("Reviewing top {} hypotheses", shortlist.len());

    let overview = collaborators
        .meta_reviewer
        .overview(&state.goal, &shortlist)
        .await?;
    state.overview = Some(overview);

    info!("Meta review complete");
    Ok(())
}

#[cfg(test)]
#[path = "phases_tests.rs"]
mod phases_tests;
