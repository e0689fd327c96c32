use serde::{Deserialize, Serialize};

use super::error::GenerationError;

/// A single prompt submitted to the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Target model identifier (e.g., "llama3.2:latest")
    pub model: String,
    pub prompt: String,
}

/// Text generation backend trait
///
/// Implementations talk to an external model server. Calls are made one at
/// a time by the summarization run; timeouts are applied by the caller.
#[async_trait::async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a completion for the request's prompt
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Models available on the backend, as reported by it
    async fn list_models(&self) -> Result<Vec<serde_json::Value>, GenerationError>;
}
