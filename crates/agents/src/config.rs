use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible endpoint
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl ModelConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Sampling temperature per agent family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperatures {
    /// Generation and evolution
    pub generation: f32,
    /// Reflection, proximity and meta-review
    pub critique: f32,
    /// Pairwise debate
    pub debate: f32,
}

impl Default for Temperatures {
    fn default() -> Self {
        Self {
            generation: 0.7,
            critique: 0.2,
            debate: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchConfig {
    /// Responses-API model that runs the web_search tool
    pub model: String,
    /// Maximum results per query
    pub k: usize,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            k: 5,
        }
    }
}

/// Everything needed to build the LLM-backed collaborators
#[derive(Debug, Clone)]
pub struct AgentsConfig {
    pub model: ModelConfig,
    pub temperatures: Temperatures,
    /// `None` disables web lookup during reflection
    pub web_search: Option<WebSearchConfig>,
}
