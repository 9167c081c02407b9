use research_core::CollaboratorError;
use thiserror::Error;

use crate::machine::Phase;

#[derive(Debug, Error)]
pub enum RunError {
    /// An external collaborator failed; the run is aborted at this phase
    #[error("{phase} phase failed: {source}")]
    Collaborator {
        phase: Phase,
        #[source]
        source: CollaboratorError,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RunResult<T> = Result<T, RunError>;
