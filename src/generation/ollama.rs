use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use super::backend::{GenerationBackend, GenerationRequest};
use super::error::GenerationError;

/// Ollama-compatible HTTP client (`/generate`, `/tags`)
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GeneratePayload<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

impl OllamaClient {
    /// Create a client for `base_url` (e.g. http://localhost:11434/api)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        info!("Generation backend: {}", base_url);

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, GenerationError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl GenerationBackend for OllamaClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let url = format!("{}/generate", self.base_url);
        let payload = GeneratePayload {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
        };

        debug!("Prompt sent to {} ({}): {}", url, request.model, request.prompt);

        let response = self.http.post(&url).json(&payload).send().await?;
        let json = Self::read_json(response).await?;

        let text = json
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                GenerationError::MalformedResponse("missing \"response\" field".to_string())
            })?
            .to_string();

        debug!("Response from {}: {}", url, text);

        Ok(text)
    }

    async fn list_models(&self) -> Result<Vec<serde_json::Value>, GenerationError> {
        let url = format!("{}/tags", self.base_url);

        let response = self.http.get(&url).send().await?;
        let json = Self::read_json(response).await?;

        json.get("models")
            .and_then(|v| v.as_array())
            .cloned()
            .ok_or_else(|| {
                GenerationError::MalformedResponse("expected { models: [...] }".to_string())
            })
    }
}
