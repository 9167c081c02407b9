use async_trait::async_trait;
use research_core::{parse, CollaboratorError, Hypothesis, ProximityScorer, ResearchGoal};
use std::sync::Arc;
use tracing::info;

use crate::prompts;
use crate::traits::ChatModel;

/// Scores goal alignment on a 0-100 scale.
pub struct ProximityAgent {
    model: Arc<dyn ChatModel>,
}

impl ProximityAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl ProximityScorer for ProximityAgent {
    async fn proximity(
        &self,
        goal: &ResearchGoal,
        hypothesis: &Hypothesis,
    ) -> Result<u32, CollaboratorError> {
        let reply = self
            .model
            .complete(prompts::PROXIMITY, &prompts::proximity_user(goal, hypothesis))
            .await?;
        let score = parse::parse_proximity(&reply);
        info!("Proximity score for {}: {}", hypothesis.short_id(), score);
        Ok(score)
    }
}

#[cfg(test)]
#[path = "proximity_tests.rs"]
mod proximity_tests;
