use async_trait::async_trait;

use crate::error::LlmError;

/// A chat-completion model: system prompt plus one user turn in, text out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}
