use research_core::CollaboratorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("model returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("model API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}

impl From<LlmError> for CollaboratorError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Config(msg) => CollaboratorError::Config(msg),
            LlmError::Api { status, body } => CollaboratorError::Api { status, body },
            LlmError::InvalidResponse(msg) => CollaboratorError::InvalidResponse(msg),
            LlmError::Serde(e) => CollaboratorError::InvalidResponse(e.to_string()),
            LlmError::Http(e) => CollaboratorError::Unavailable(e.to_string()),
        }
    }
}
