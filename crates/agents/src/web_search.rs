//! Web lookup through the OpenAI Responses API `web_search` tool.

use async_trait::async_trait;
use reqwest::Client;
use research_core::{parse, SearchResult, WebSearch};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::config::{ModelConfig, WebSearchConfig};
use crate::error::LlmError;

/// Asks a search-enabled model for a JSON array of sources and parses it
/// leniently. Every failure degrades to an empty result list.
#[derive(Clone)]
pub struct OpenAiWebSearch {
    connection: ModelConfig,
    config: WebSearchConfig,
    client: Client,
}

impl OpenAiWebSearch {
    pub fn new(connection: ModelConfig, config: WebSearchConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(connection.timeout).build()?;
        Ok(Self::with_client(connection, config, client))
    }

    /// Reuse an existing HTTP client, e.g. the one the chat models share.
    pub fn with_client(connection: ModelConfig, config: WebSearchConfig, client: Client) -> Self {
        info!(
            "Initialized web search with model={}, k={}",
            config.model, config.k
        );
        Self {
            connection,
            config,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/responses",
            self.connection.base_url.trim_end_matches('/')
        )
    }

    fn prompt(&self, query: &str) -> String {
        format!(
            "Use web search to find high-quality sources for: {}\n\
             Then return ONLY a JSON array of up to {} objects with keys: title, url, snippet (<=240 chars).",
            query, self.config.k
        )
    }

    async fn request(&self, query: &str) -> Result<String, LlmError> {
        let payload = json!({
            "model": self.config.model,
            "input": self.prompt(query),
            "tools": [{"type": "web_search"}],
        });

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.connection.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let body: Value = res.json().await?;
        Ok(output_text(&body))
    }
}

#[async_trait]
impl WebSearch for OpenAiWebSearch {
    async fn search(&self, query: &str) -> Vec<SearchResult> {
        info!("Performing web search for query: {}", query);
        match self.request(query).await {
            Ok(text) => {
                let results = parse::parse_search_results(&text, self.config.k);
                debug!("Parsed {} search results", results.len());
                results
            }
            Err(e) => {
                warn!("Web search failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Concatenated `output_text` parts of a Responses API body.
fn output_text(body: &Value) -> String {
    if let Some(text) = body.get("output_text").and_then(Value::as_str) {
        return text.to_string();
    }

    body.get("output")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "web_search_tests.rs"]
mod web_search_tests;
