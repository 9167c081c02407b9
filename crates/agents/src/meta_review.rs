use async_trait::async_trait;
use research_core::{CollaboratorError, Hypothesis, MetaReviewer, ResearchGoal};
use std::sync::Arc;
use tracing::info;

use crate::prompts;
use crate::traits::ChatModel;

/// Writes the final research overview; the reply is used verbatim.
pub struct MetaReviewAgent {
    model: Arc<dyn ChatModel>,
}

impl MetaReviewAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl MetaReviewer for MetaReviewAgent {
    async fn overview(
        &self,
        goal: &ResearchGoal,
        shortlist: &[Hypothesis],
    ) -> Result<String, CollaboratorError> {
        info!("Generating meta-review for {} hypotheses", shortlist.len());
        let overview = self
            .model
            .complete(prompts::META_REVIEW, &prompts::meta_review_user(goal, shortlist))
            .await?;
        info!("Meta-review generation complete");
        Ok(overview)
    }
}
