use reqwest::Client;
use research_core::{Collaborators, WebSearch};
use std::sync::Arc;
use tracing::info;

use crate::config::AgentsConfig;
use crate::error::LlmError;
use crate::providers::{OpenAiChatModel, ScriptedChatModel};
use crate::traits::ChatModel;
use crate::web_search::OpenAiWebSearch;
use crate::{
    EvolutionAgent, GenerationAgent, MetaReviewAgent, ProximityAgent, RankingAgent,
    ReflectionAgent,
};

/// Build every collaborator against an OpenAI-compatible endpoint.
pub fn build_collaborators(config: AgentsConfig) -> Result<Collaborators, LlmError> {
    if config.model.api_key.trim().is_empty() {
        return Err(LlmError::Config("API key is empty".to_string()));
    }

    let client = Client::builder().timeout(config.model.timeout).build()?;
    let model = |temperature: f32| -> Arc<dyn ChatModel> {
        Arc::new(OpenAiChatModel::with_client(
            config.model.clone(),
            temperature,
            client.clone(),
        ))
    };

    let search = config.web_search.as_ref().map(|web| {
        Arc::new(OpenAiWebSearch::with_client(
            config.model.clone(),
            web.clone(),
            client.clone(),
        )) as Arc<dyn WebSearch>
    });

    Ok(assemble(
        model(config.temperatures.generation),
        model(config.temperatures.critique),
        model(config.temperatures.debate),
        search,
    ))
}

/// Collaborators backed by the deterministic offline model. No network.
pub fn build_offline_collaborators() -> Collaborators {
    let model: Arc<dyn ChatModel> = Arc::new(ScriptedChatModel::offline());
    assemble(model.clone(), model.clone(), model, None)
}

/// Wire agents onto the three model roles.
pub fn assemble(
    generation: Arc<dyn ChatModel>,
    critique: Arc<dyn ChatModel>,
    debate: Arc<dyn ChatModel>,
    search: Option<Arc<dyn WebSearch>>,
) -> Collaborators {
    info!(
        "Assembling agents: generation={}, critique={}, debate={}, web_search={}",
        generation.name(),
        critique.name(),
        debate.name(),
        search.is_some()
    );
    Collaborators {
        generator: Arc::new(GenerationAgent::new(generation.clone())),
        reflector: Arc::new(ReflectionAgent::new(critique.clone(), search)),
        judge: Arc::new(RankingAgent::new(debate)),
        evolver: Arc::new(EvolutionAgent::new(generation)),
        proximity: Arc::new(ProximityAgent::new(critique.clone())),
        meta_reviewer: Arc::new(MetaReviewAgent::new(critique)),
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod factory_tests;
