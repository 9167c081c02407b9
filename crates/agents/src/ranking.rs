use async_trait::async_trait;
use research_core::{parse, CollaboratorError, Hypothesis, PairwiseJudge, ResearchGoal, Verdict};
use std::sync::Arc;
use tracing::info;

use crate::prompts;
use crate::traits::ChatModel;

/// Judges a pairwise debate between two hypotheses.
pub struct RankingAgent {
    model: Arc<dyn ChatModel>,
}

impl RankingAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl PairwiseJudge for RankingAgent {
    async fn judge(
        &self,
        goal: &ResearchGoal,
        a: &Hypothesis,
        b: &Hypothesis,
    ) -> Result<Verdict, CollaboratorError> {
        info!("Comparing hypotheses {} vs {}", a.short_id(), b.short_id());
        let reply = self
            .model
            .complete(prompts::PAIRWISE_DEBATE, &prompts::debate_user(goal, a, b))
            .await?;
        let verdict = parse::parse_verdict(&reply);
        info!("Comparison complete. Winner: {}", verdict.winner);
        Ok(verdict)
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
