//! Tournament runner: judges every pair of a round and updates ratings

use std::sync::Arc;

use research_core::{Hypothesis, PairwiseJudge, ResearchGoal, Side, Verdict};
use tracing::{debug, info, warn};

use crate::elo::EloTracker;
use crate::pairing::Pairing;
use crate::results::{MatchResult, TournamentSummary};

/// Runs one round of pairwise matches over a population
pub struct TournamentRunner {
    judge: Arc<dyn PairwiseJudge>,
}

impl TournamentRunner {
    pub fn new(judge: Arc<dyn PairwiseJudge>) -> Self {
        Self { judge }
    }

    /// Pair the population, judge each pair and apply the Elo update.
    ///
    /// Afterwards every hypothesis in `population`, byes included, has its
    /// `score` set to its rating in `ratings`. A failed judge call only costs
    /// that match its verdict: it is logged and replaced by the fallback.
    pub async fn run(
        &self,
        ratings: &mut EloTracker,
        population: &mut [Hypothesis],
        goal: &ResearchGoal,
        round_index: u32,
        seed: u64,
    ) -> TournamentSummary {
        let pairing = Pairing::new(population.len(), seed, round_index);
        info!(
            "Running tournament round {} with {} matches over {} hypotheses",
            round_index,
            pairing.len(),
            population.len()
        );
        if let Some(bye) = pairing.bye.and_then(|i| population.get(i)) {
            debug!("Hypothesis {} receives a bye", bye.short_id());
        }

        let mut summary = TournamentSummary::new(round_index);
        for &(i, j) in &pairing.pairs {
            let (a, b) = (&population[i], &population[j]);
            let verdict = self.judge_pair(goal, a, b).await;

            let (winner, loser) = match verdict.winner {
                Side::A => (a, b),
                Side::B => (b, a),
            };
            let delta = ratings.update(&winner.id, &loser.id);
            debug!(
                "Match {} vs {}: winner {} ({:+.1}/{:+.1})",
                a.short_id(),
                b.short_id(),
                winner.short_id(),
                delta.winner,
                delta.loser
            );

            summary.add_match(MatchResult {
                a_id: a.id.clone(),
                b_id: b.id.clone(),
                winner_id: winner.id.clone(),
                loser_id: loser.id.clone(),
                reasoning: verdict.reasoning,
            });
        }

        // Project ratings back onto the hypotheses for downstream selection
        for hypothesis in population.iter_mut() {
            hypothesis.score = ratings.rating(&hypothesis.id);
        }

        info!("Tournament round {} complete", round_index);
        summary
    }

    async fn judge_pair(&self, goal: &ResearchGoal, a: &Hypothesis, b: &Hypothesis) -> Verdict {
        match self.judge.judge(goal, a, b).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(
                    "Judge failed for {} vs {}, using fallback verdict: {}",
                    a.short_id(),
                    b.short_id(),
                    e
                );
                Verdict::fallback()
            }
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
