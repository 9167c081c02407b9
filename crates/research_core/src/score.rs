//! Composite scoring and score-ordered selection.

use std::cmp::Ordering;

use crate::types::Hypothesis;

/// Weight kept from the previous composite score.
pub const PREVIOUS_SCORE_WEIGHT: f64 = 0.5;

/// Amplification of the 0-100 proximity judgment, so it is commensurate with
/// a tournament rating around 1500.
pub const PROXIMITY_WEIGHT: f64 = 5.0;

/// Blend the previous composite score with a fresh proximity judgment.
///
/// Applied once per round, so earlier proximity contributions decay by half
/// every round instead of being averaged.
pub fn blend(previous: f64, proximity: f64) -> f64 {
    PREVIOUS_SCORE_WEIGHT * previous + PROXIMITY_WEIGHT * proximity
}

/// The `n` best hypotheses by descending score.
///
/// The sort is stable, so equal scores keep their population order.
pub fn top_by_score(population: &[Hypothesis], n: usize) -> Vec<Hypothesis> {
    let mut ranked: Vec<&Hypothesis> = population.iter().collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
