//! File configuration (TOML) for the `coscientist` binary.
//!
//! ```toml
//! [run]
//! rounds = 3
//! population = 6
//! keep_top = 4
//!
//! [model]
//! model = "gpt-4o-mini"
//! api_key_env = "OPENAI_API_KEY"
//!
//! [temperatures]
//! debate = 0.4
//!
//! [web_search]
//! k = 5
//! ```

use agents::{AgentsConfig, ModelConfig, Temperatures, WebSearchConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{RunError, RunResult};
use crate::params::RunParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub run: RunParams,
    pub model: ModelSection,
    pub temperatures: Temperatures,
    pub web_search: WebSearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            base_url: agents::DEFAULT_BASE_URL.to_string(),
            model: agents::DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> RunResult<Self> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                Self::parse(&contents)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn parse(contents: &str) -> RunResult<Self> {
        toml::from_str(contents).map_err(|e| RunError::Config(format!("invalid config: {}", e)))
    }

    /// Agent settings, reading the API key from the configured variable.
    pub fn agents_config(&self) -> RunResult<AgentsConfig> {
        let api_key = std::env::var(&self.model.api_key_env).map_err(|_| {
            RunError::Config(format!("missing {} in environment", self.model.api_key_env))
        })?;
        Ok(self.agents_config_with_key(api_key))
    }

    pub fn agents_config_with_key(&self, api_key: String) -> AgentsConfig {
        let mut model = ModelConfig::new(api_key, self.model.model.clone());
        model.base_url = self.model.base_url.clone();
        model.timeout = Duration::from_secs(self.model.timeout_secs);

        AgentsConfig {
            model,
            temperatures: self.temperatures,
            web_search: self.run.web_search.then(|| self.web_search.clone()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
