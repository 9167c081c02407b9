use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::LlmError;
use crate::prompts;
use crate::traits::ChatModel;

/// One request seen by a [`ScriptedChatModel`].
#[derive(Debug, Clone)]
pub struct ScriptedCall<'a> {
    /// Zero-based position of this call on the model
    pub index: usize,
    pub system: &'a str,
    pub user: &'a str,
}

type Responder = dyn Fn(&ScriptedCall<'_>) -> Result<String, LlmError> + Send + Sync;

/// Chat model whose replies come from a closure instead of the network.
///
/// Used by tests and by `--offline` runs.
pub struct ScriptedChatModel {
    responder: Box<Responder>,
    calls: AtomicUsize,
}

impl ScriptedChatModel {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&ScriptedCall<'_>) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always replies with `text`.
    pub fn fixed(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| Ok(text.clone()))
    }

    /// Deterministic, well-formed replies for every agent prompt.
    pub fn offline() -> Self {
        Self::new(offline_reply)
    }

    /// Number of completions served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        (self.responder)(&ScriptedCall {
            index,
            system,
            user,
        })
    }
}

fn offline_reply(call: &ScriptedCall<'_>) -> Result<String, LlmError> {
    let n = call.index + 1;
    let subject = call
        .user
        .lines()
        .next()
        .and_then(|line| line.split_once(": ").map(|(_, rest)| rest))
        .unwrap_or(call.user);

    let reply = match call.system {
        prompts::GENERATION => format!(
            "HYPOTHESIS: Candidate mechanism {} for {}.\nRATIONALE:\n- derived offline\n- variant seed {}",
            n, subject, n
        ),
        prompts::REFLECTION => "STRENGTHS:\n- concrete\n- cheap to test\n\n\
             WEAKNESSES:\n- not checked against literature\n\n\
             RISKS:\n- offline judgment only\n\n\
             PROPOSED TESTS:\n- repeat the run with a live model"
            .to_string(),
        prompts::PAIRWISE_DEBATE => {
            let winner = if n % 3 == 0 { "B" } else { "A" };
            format!("WINNER: {}\nREASONING: offline judgment {}", winner, n)
        }
        prompts::EVOLUTION => format!(
            "- {} (tightened controls)\n- {} (dose sweep)",
            subject, subject
        ),
        prompts::PROXIMITY => format!("{}\nOffline estimate.", 40 + (n * 17) % 60),
        prompts::META_REVIEW => format!("# Research overview (offline)\n\n{}", call.user),
        _ => {
            return Err(LlmError::InvalidResponse(
                "offline model does not recognize this prompt".to_string(),
            ))
        }
    };
    Ok(reply)
}

#[cfg(test)]
#[path = "scripted_tests.rs"]
mod scripted_tests;
