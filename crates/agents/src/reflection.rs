use async_trait::async_trait;
use research_core::{
    parse, Citation, CollaboratorError, Hypothesis, Reflector, ResearchGoal, Review, SearchResult,
    WebSearch,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::prompts;
use crate::traits::ChatModel;

/// Critiques a hypothesis, optionally grounded in web snippets.
pub struct ReflectionAgent {
    model: Arc<dyn ChatModel>,
    search: Option<Arc<dyn WebSearch>>,
}

impl ReflectionAgent {
    pub fn new(model: Arc<dyn ChatModel>, search: Option<Arc<dyn WebSearch>>) -> Self {
        Self { model, search }
    }

    async fn snippets(&self, goal: &ResearchGoal, hypothesis: &Hypothesis) -> Vec<SearchResult> {
        let Some(search) = &self.search else {
            return Vec::new();
        };
        let query = prompts::web_query(goal, hypothesis);
        let results = search.search(&query).await;
        info!("Found {} web search results", results.len());

        results
            .into_iter()
            .take(prompts::REFLECTION_SNIPPETS)
            .map(|r| SearchResult {
                content: prompts::truncate_chars(&r.content, prompts::SNIPPET_CHARS).to_string(),
                ..r
            })
            .collect()
    }
}

#[async_trait]
impl Reflector for ReflectionAgent {
    async fn reflect(
        &self,
        goal: &ResearchGoal,
        hypothesis: &Hypothesis,
    ) -> Result<Review, CollaboratorError> {
        info!("Reflecting on hypothesis {}", hypothesis.short_id());
        let snippets = self.snippets(goal, hypothesis).await;

        let reply = self
            .model
            .complete(
                prompts::REFLECTION,
                &prompts::reflection_user(goal, hypothesis, &snippets),
            )
            .await?;

        let review = Review {
            hypothesis_id: hypothesis.id.clone(),
            strengths: parse::parse_section(&reply, parse::STRENGTHS),
            weaknesses: parse::parse_section(&reply, parse::WEAKNESSES),
            risks: parse::parse_section(&reply, parse::RISKS),
            proposed_tests: parse::parse_section(&reply, parse::PROPOSED_TESTS),
            updated_rationale: None,
            added_citations: snippets
                .into_iter()
                .map(|s| Citation {
                    title: s.title,
                    url: s.url,
                    snippet: s.content,
                })
                .collect(),
        };
        debug!(
            "Review of {}: {} strengths, {} weaknesses",
            hypothesis.short_id(),
            review.strengths.len(),
            review.weaknesses.len()
        );
        Ok(review)
    }
}

#[cfg(test)]
#[path = "reflection_tests.rs"]
mod reflection_tests;
