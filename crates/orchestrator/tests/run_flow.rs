//! End-to-end runs against scripted collaborators

use agents::{prompts, LlmError, ScriptedCall, ScriptedChatModel};
use orchestrator::{FinalReport, Orchestrator, Phase, RoundState, RunError, RunParams};
use research_core::ResearchGoal;
use std::sync::Arc;

fn params(rounds: u32) -> RunParams {
    RunParams {
        rounds,
        population: 4,
        keep_top: 2,
        shortlist: 3,
        seed: 7,
        carry_ratings: false,
        web_search: false,
    }
}

fn goal() -> ResearchGoal {
    ResearchGoal::new("Find a mechanism for antibiotic tolerance")
}

async fn offline_run(rounds: u32) -> orchestrator::RunOutcome {
    Orchestrator::new(agents::build_offline_collaborators())
        .run(RoundState::new(goal(), params(rounds)))
        .await
        .expect("offline run succeeds")
}

#[tokio::test]
async fn single_round_never_evolves() {
    let outcome = offline_run(1).await;

    assert_eq!(
        outcome.trace.phases,
        vec![
            Phase::Generate,
            Phase::Reflect,
            Phase::Rank,
            Phase::Proximity,
            Phase::MetaReview
        ]
    );
    assert_eq!(outcome.state.population.len(), 4);
    assert!(outcome.state.population.iter().all(|h| h.generation == 0));
    assert_eq!(outcome.state.version, 5);
}

#[tokio::test]
async fn evolution_runs_once_between_each_pair_of_rounds() {
    for rounds in 1..=4u32 {
        let outcome = offline_run(rounds).await;
        let trace = &outcome.trace;

        assert_eq!(trace.count(Phase::Generate), 1);
        assert_eq!(trace.count(Phase::Evolve), rounds as usize - 1);
        assert_eq!(trace.count(Phase::Rank), rounds as usize);
        assert_eq!(trace.count(Phase::MetaReview), 1);
        assert_eq!(trace.phases.last(), Some(&Phase::MetaReview));
        assert_eq!(outcome.state.round_index, rounds - 1);
    }
}

#[tokio::test]
async fn evolved_population_keeps_lineage() {
    let outcome = offline_run(2).await;
    let state = &outcome.state;

    // keep_top survivors plus two offline variants each
    assert_eq!(state.population.len(), 6);
    let (parents, children) = state.population.split_at(2);
    assert!(parents.iter().all(|h| h.generation == 0 && h.parent_id.is_none()));
    for child in children {
        assert_eq!(child.generation, 1);
        let parent_id = child.parent_id.as_deref().expect("variant has a parent");
        assert!(parents.iter().any(|p| p.id == parent_id));
    }
    assert_eq!(state.reviews.len(), 6);
}

#[tokio::test]
async fn report_reflects_final_state() {
    let outcome = offline_run(2).await;
    let report = FinalReport::from_state(&outcome.state);

    assert_eq!(report.rounds_completed, 2);
    assert_eq!(report.shortlist.len(), 3);
    assert!(report
        .shortlist
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
    assert!(report.overview.starts_with("# Research overview (offline)"));
    assert_eq!(
        report.last_tournament.as_ref().map(|t| t.round_index),
        Some(1)
    );
}

#[tokio::test]
async fn collaborator_failure_aborts_with_phase() {
    let offline = Arc::new(ScriptedChatModel::offline());
    let critique = Arc::new(ScriptedChatModel::new(|call: &ScriptedCall<'_>| {
        if call.system == prompts::PROXIMITY {
            return Err(LlmError::InvalidResponse("scorer offline".into()));
        }
        Ok("STRENGTHS:\n- plausible".to_string())
    }));
    let collaborators = agents::assemble(offline.clone(), critique, offline, None);

    let err = Orchestrator::new(collaborators)
        .run(RoundState::new(goal(), params(3)))
        .await
        .unwrap_err();

    match &err {
        RunError::Collaborator { phase, .. } => assert_eq!(*phase, Phase::Proximity),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("proximity phase failed"));
}

#[tokio::test]
async fn judge_failures_fall_back_and_run_completes() {
    let offline = Arc::new(ScriptedChatModel::offline());
    let broken_judge = Arc::new(ScriptedChatModel::new(|_: &ScriptedCall<'_>| {
        Err(LlmError::InvalidResponse("judge offline".into()))
    }));
    let collaborators =
        agents::assemble(offline.clone(), offline, broken_judge.clone(), None);

    let outcome = Orchestrator::new(collaborators)
        .run(RoundState::new(goal(), params(1)))
        .await
        .expect("judge failures are not fatal");

    let summary = outcome.state.tournament.expect("tournament ran");
    assert_eq!(summary.results.len(), 2);
    assert!(summary.results.iter().all(|m| m.winner_id == m.a_id));
    assert!(summary.patterns.iter().all(|p| p.is_empty()));
    assert_eq!(broken_judge.calls(), 2);
}

#[tokio::test]
async fn invalid_params_are_rejected_before_any_call() {
    let model = Arc::new(ScriptedChatModel::offline());
    let collaborators = agents::assemble(model.clone(), model.clone(), model.clone(), None);

    let err = Orchestrator::new(collaborators)
        .run(RoundState::new(
            goal(),
            RunParams {
                population: 0,
                ..params(1)
            },
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Config(_)));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn same_seed_gives_same_pairings() {
    let first = offline_run(1).await;
    let second = offline_run(1).await;

    let pairs = |outcome: &orchestrator::RunOutcome| -> Vec<(usize, usize)> {
        let population = &outcome.state.population;
        let position = |id: &str| population.iter().position(|h| h.id == id).unwrap();
        outcome
            .state
            .tournament
            .as_ref()
            .unwrap()
            .results
            .iter()
            .map(|m| (position(&m.a_id), position(&m.b_id)))
            .collect()
    };
    assert_eq!(pairs(&first), pairs(&second));
}
