use thiserror::Error;

/// Failure of an external collaborator call.
///
/// Parse problems never show up here: the parsers in [`crate::parse`] degrade
/// to defaults instead. This type is for calls that did not produce text at all.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("collaborator API error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error("collaborator returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("collaborator configuration error: {0}")]
    Config(String),
}
