use super::*;
use crate::elo::DEFAULT_ELO;
use async_trait::async_trait;
use research_core::CollaboratorError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Prefers the hypothesis whose text sorts first
struct AlphabeticalJudge;

#[async_trait]
impl PairwiseJudge for AlphabeticalJudge {
    async fn judge(
        &self,
        _goal: &ResearchGoal,
        a: &Hypothesis,
        b: &Hypothesis,
    ) -> Result<Verdict, CollaboratorError> {
        let (winner, best) = if a.text <= b.text {
            (Side::A, &a.text)
        } else {
            (Side::B, &b.text)
        };
        Ok(Verdict {
            winner,
            reasoning: format!("{} reads better", best),
        })
    }
}

/// Fails every call
struct BrokenJudge {
    calls: AtomicUsize,
}

#[async_trait]
impl PairwiseJudge for BrokenJudge {
    async fn judge(
        &self,
        _goal: &ResearchGoal,
        _a: &Hypothesis,
        _b: &Hypothesis,
    ) -> Result<Verdict, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CollaboratorError::Unavailable("quota exceeded".into()))
    }
}

fn population(texts: &[&str]) -> Vec<Hypothesis> {
    texts
        .iter()
        .map(|t| Hypothesis::new(*t, "because", 0))
        .collect()
}

#[tokio::test]
async fn two_hypotheses_play_one_match() {
    let runner = TournamentRunner::new(Arc::new(AlphabeticalJudge));
    let mut ratings = EloTracker::new();
    let mut pop = population(&["H1", "H2"]);
    let goal = ResearchGoal::new("goal");

    let summary = runner.run(&mut ratings, &mut pop, &goal, 0, 0).await;

    assert_eq!(summary.round_index, 0);
    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.patterns, vec!["H1 reads better"]);
    let result = &summary.results[0];
    assert_eq!(result.winner_id, pop[0].id);
    assert_eq!(result.loser_id, pop[1].id);

    assert!(pop[0].score > DEFAULT_ELO);
    assert!(pop[1].score < DEFAULT_ELO);
    assert!((pop[0].score + pop[1].score - 3000.0).abs() < 1e-9);
}

#[tokio::test]
async fn odd_population_bye_keeps_rating() {
    let runner = TournamentRunner::new(Arc::new(AlphabeticalJudge));
    let mut ratings = EloTracker::new();
    let mut pop = population(&["A", "B", "C"]);
    let goal = ResearchGoal::new("goal");

    let summary = runner.run(&mut ratings, &mut pop, &goal, 0, 0).await;
    assert_eq!(summary.results.len(), 1);

    let bye_index = Pairing::new(3, 0, 0).bye.expect("bye");
    let bye = &pop[bye_index];
    assert_eq!(bye.score, DEFAULT_ELO);
    assert!(summary
        .results
        .iter()
        .all(|m| m.a_id != bye.id && m.b_id != bye.id));
}

#[tokio::test]
async fn carried_ratings_are_projected_onto_byes() {
    let runner = TournamentRunner::new(Arc::new(AlphabeticalJudge));
    let mut pop = population(&["A", "B", "C"]);
    let mut ratings = EloTracker::new();
    for (h, r) in pop.iter().zip([1600.0, 1550.0, 1450.0]) {
        ratings.ratings.insert(h.id.clone(), r);
    }
    let bye_index = Pairing::new(3, 9, 4).bye.expect("bye");
    let carried = ratings.rating(&pop[bye_index].id);

    runner
        .run(&mut ratings, &mut pop, &ResearchGoal::new("g"), 4, 9)
        .await;

    assert_eq!(pop[bye_index].score, carried);
}

#[tokio::test]
async fn judge_failures_fall_back_to_a_without_aborting() {
    let judge = Arc::new(BrokenJudge {
        calls: AtomicUsize::new(0),
    });
    let runner = TournamentRunner::new(judge.clone());
    let mut ratings = EloTracker::new();
    let mut pop = population(&["w", "x", "y", "z"]);

    let summary = runner
        .run(&mut ratings, &mut pop, &ResearchGoal::new("g"), 1, 3)
        .await;

    assert_eq!(judge.calls.load(Ordering::SeqCst), 2);
    assert_eq!(summary.results.len(), 2);
    for m in &summary.results {
        assert_eq!(m.winner_id, m.a_id);
        assert_eq!(m.loser_id, m.b_id);
    }
    assert_eq!(summary.patterns.len(), 2);
}

#[tokio::test]
async fn same_seed_and_round_reproduce_matches() {
    let runner = TournamentRunner::new(Arc::new(AlphabeticalJudge));
    let goal = ResearchGoal::new("g");
    let pop = population(&["p", "q", "r", "s", "t", "u"]);

    let mut first_pop = pop.clone();
    let first = runner
        .run(&mut EloTracker::new(), &mut first_pop, &goal, 2, 11)
        .await;
    let mut second_pop = pop.clone();
    let second = runner
        .run(&mut EloTracker::new(), &mut second_pop, &goal, 2, 11)
        .await;

    assert_eq!(first, second);
    assert_eq!(first_pop, second_pop);
}
