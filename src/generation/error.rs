use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Error communicating with generation backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for GenerationError {
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedResponse(source.to_string())
    }
}
