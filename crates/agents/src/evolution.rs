use async_trait::async_trait;
use research_core::{parse, CollaboratorError, Evolver, Hypothesis};
use std::sync::Arc;
use tracing::{debug, info};

use crate::prompts;
use crate::traits::ChatModel;

/// Refines a tournament winner into up to two variants.
pub struct EvolutionAgent {
    model: Arc<dyn ChatModel>,
}

impl EvolutionAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Evolver for EvolutionAgent {
    async fn evolve(
        &self,
        base: &Hypothesis,
        patterns: &[String],
    ) -> Result<Vec<Hypothesis>, CollaboratorError> {
        info!("Evolving hypothesis {}", base.short_id());
        let reply = self
            .model
            .complete(prompts::EVOLUTION, &prompts::evolution_user(base, patterns))
            .await?;

        let variants: Vec<Hypothesis> = parse::parse_variants(&reply)
            .into_iter()
            .map(|text| base.variant(text))
            .collect();
        for variant in &variants {
            debug!(
                "Variant {} of {}: {}",
                variant.short_id(),
                base.short_id(),
                prompts::truncate_chars(&variant.text, 100)
            );
        }
        info!("Generated {} variants", variants.len());
        Ok(variants)
    }
}

#[cfg(test)]
#[path = "evolution_tests.rs"]
mod evolution_tests;
