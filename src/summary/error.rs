use thiserror::Error;

use crate::generation::GenerationError;
use crate::retrieval::RetrievalError;

/// Fatal failures of a summarization run
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("invalid prompt template: {0}")]
    InvalidPrompt(String),

    #[error("failed to archive transcript: {0}")]
    Archive(#[source] std::io::Error),

    #[error("unexpected failure: {0}")]
    Internal(String),

    /// The caller stopped listening; nothing is left to report to
    #[error("caller disconnected")]
    Cancelled,
}
