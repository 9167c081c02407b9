//! Core data model shared by every phase of a run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The research goal a run is searching hypotheses for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchGoal {
    pub text: String,
    /// Hard constraints passed verbatim to the generator
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
    /// Soft preferences passed verbatim to the generator
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
}

impl ResearchGoal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A source discovered while reviewing a hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// One candidate in the searched population.
///
/// `score` is the composite ranking score: the tournament rating written by
/// the ranking phase, then blended with a proximity judgment. Every selection
/// decision in a run reads this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: String,
    pub text: String,
    pub rationale: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Round index the hypothesis was generated in, or parent generation + 1
    #[serde(default)]
    pub generation: u32,
}

impl Hypothesis {
    /// Create a fresh hypothesis with a new unique id.
    pub fn new(text: impl Into<String>, rationale: impl Into<String>, generation: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            rationale: rationale.into(),
            citations: Vec::new(),
            score: 0.0,
            parent_id: None,
            generation,
        }
    }

    /// Create a refined variant of `self`, parented to it one generation later.
    pub fn variant(&self, text: impl Into<String>) -> Self {
        Self {
            parent_id: Some(self.id.clone()),
            ..Self::new(text, self.rationale.clone(), self.generation + 1)
        }
    }

    /// First eight characters of the id, for logs and console output.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Critique of a single hypothesis, replaced wholesale every round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub hypothesis_id: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub risks: Vec<String>,
    pub proposed_tests: Vec<String>,
    pub updated_rationale: Option<String>,
    #[serde(default)]
    pub added_citations: Vec<Citation>,
}

/// Which side of a pairwise comparison won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Outcome of one pairwise judgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub winner: Side,
    pub reasoning: String,
}

impl Verdict {
    /// Verdict used when the judge gives no usable answer.
    ///
    /// Always picks side A, so a failed or unparseable judgment favors the
    /// first hypothesis of the pair.
    pub fn fallback() -> Self {
        Self {
            winner: Side::A,
            reasoning: String::new(),
        }
    }
}

/// One web-lookup hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
