pub mod error;
pub mod parse;
pub mod score;
pub mod types;

pub use error::CollaboratorError;
pub use score::{blend, top_by_score};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

// =============================================================================
// Collaborator traits: one seam per external text-generation capability
// =============================================================================

/// Proposes new hypotheses for a goal, one per call.
#[async_trait]
pub trait HypothesisGenerator: Send + Sync {
    /// Generate a single hypothesis tagged with `generation`.
    async fn generate(
        &self,
        goal: &ResearchGoal,
        generation: u32,
    ) -> Result<Hypothesis, CollaboratorError>;
}

/// Critiques one hypothesis.
#[async_trait]
pub trait Reflector: Send + Sync {
    async fn reflect(
        &self,
        goal: &ResearchGoal,
        hypothesis: &Hypothesis,
    ) -> Result<Review, CollaboratorError>;
}

/// Picks the better of two hypotheses for a goal.
///
/// Implementations should degrade unparseable output to
/// [`Verdict::fallback`] rather than fail; an `Err` means the call itself failed.
#[async_trait]
pub trait PairwiseJudge: Send + Sync {
    async fn judge(
        &self,
        goal: &ResearchGoal,
        a: &Hypothesis,
        b: &Hypothesis,
    ) -> Result<Verdict, CollaboratorError>;
}

/// Refines a winning hypothesis using the round's tournament patterns.
#[async_trait]
pub trait Evolver: Send + Sync {
    /// Returns zero to two variants parented to `base`.
    async fn evolve(
        &self,
        base: &Hypothesis,
        patterns: &[String],
    ) -> Result<Vec<Hypothesis>, CollaboratorError>;
}

/// Scores goal alignment of a hypothesis in `[0, 100]`.
#[async_trait]
pub trait ProximityScorer: Send + Sync {
    async fn proximity(
        &self,
        goal: &ResearchGoal,
        hypothesis: &Hypothesis,
    ) -> Result<u32, CollaboratorError>;
}

/// Synthesizes the final research overview from a shortlist.
#[async_trait]
pub trait MetaReviewer: Send + Sync {
    async fn overview(
        &self,
        goal: &ResearchGoal,
        shortlist: &[Hypothesis],
    ) -> Result<String, CollaboratorError>;
}

/// Web lookup. Failures degrade to an empty list, so there is no error type.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Vec<SearchResult>;
}

/// The full set of collaborators a run needs.
#[derive(Clone)]
pub struct Collaborators {
    pub generator: Arc<dyn HypothesisGenerator>,
    pub reflector: Arc<dyn Reflector>,
    pub judge: Arc<dyn PairwiseJudge>,
    pub evolver: Arc<dyn Evolver>,
    pub proximity: Arc<dyn ProximityScorer>,
    pub meta_reviewer: Arc<dyn MetaReviewer>,
}
