use async_trait::async_trait;
use research_core::{parse, CollaboratorError, Hypothesis, HypothesisGenerator, ResearchGoal};
use std::sync::Arc;
use tracing::{debug, info};

use crate::prompts;
use crate::traits::ChatModel;

/// Proposes hypotheses from the research goal, one completion per hypothesis.
pub struct GenerationAgent {
    model: Arc<dyn ChatModel>,
}

impl GenerationAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl HypothesisGenerator for GenerationAgent {
    async fn generate(
        &self,
        goal: &ResearchGoal,
        generation: u32,
    ) -> Result<Hypothesis, CollaboratorError> {
        info!(
            "Generating hypothesis for goal: {}",
            prompts::truncate_chars(&goal.text, 100)
        );
        let reply = self
            .model
            .complete(prompts::GENERATION, &prompts::generation_user(goal))
            .await?;

        let (text, rationale) = parse::parse_generation(&reply);
        let hypothesis = Hypothesis::new(text, rationale, generation);
        debug!(
            "Generated hypothesis {}: {}",
            hypothesis.short_id(),
            prompts::truncate_chars(&hypothesis.text, 100)
        );
        Ok(hypothesis)
    }
}

#[cfg(test)]
#[path = "generation_tests.rs"]
mod generation_tests;
