//! LLM-backed collaborators for co-scientist runs
//!
//! Each agent wraps a [`ChatModel`] with one system prompt and one parser
//! from [`research_core::parse`]:
//! - generation and evolution propose hypotheses
//! - reflection critiques them, optionally with web snippets
//! - ranking judges pairwise debates
//! - proximity scores goal alignment
//! - meta-review writes the final overview

pub mod config;
pub mod error;
pub mod factory;
pub mod prompts;
pub mod providers;
pub mod traits;
pub mod web_search;

mod evolution;
mod generation;
mod meta_review;
mod proximity;
mod ranking;
mod reflection;

pub use config::*;
pub use error::LlmError;
pub use evolution::EvolutionAgent;
pub use factory::*;
pub use generation::GenerationAgent;
pub use meta_review::MetaReviewAgent;
pub use providers::{OpenAiChatModel, ScriptedCall, ScriptedChatModel};
pub use proximity::ProximityAgent;
pub use ranking::RankingAgent;
pub use reflection::ReflectionAgent;
pub use traits::ChatModel;
pub use web_search::OpenAiWebSearch;
