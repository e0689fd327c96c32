// Shared test doubles for the transcript source and generation backend

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;
use transcript_digest::generation::{GenerationBackend, GenerationError, GenerationRequest};
use transcript_digest::retrieval::{RetrievalError, RetrievedTranscript, TranscriptSource};

/// Generation backend that records every request
///
/// Responds with "summary N" for the N-th call (1-based), or fails on the
/// configured call.
#[derive(Default)]
pub struct MockBackend {
    requests: Mutex<Vec<GenerationRequest>>,
    fail_on_call: Option<usize>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        if self.fail_on_call == Some(call) {
            return Err(GenerationError::Status {
                status: 500,
                body: "model crashed".to_string(),
            });
        }

        Ok(format!("summary {}", call))
    }

    async fn list_models(&self) -> Result<Vec<serde_json::Value>, GenerationError> {
        Ok(vec![
            serde_json::json!({ "name": "llama3.2:latest" }),
            serde_json::json!({ "name": "mistral:7b" }),
        ])
    }
}

/// Transcript source that writes fixed captions into a directory
pub struct MockSource {
    dir: PathBuf,
    captions: Option<String>,
}

impl MockSource {
    pub fn new(dir: impl Into<PathBuf>, captions: &str) -> Self {
        Self {
            dir: dir.into(),
            captions: Some(captions.to_string()),
        }
    }

    /// A source with no captions in any language
    pub fn empty(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            captions: None,
        }
    }
}

#[async_trait::async_trait]
impl TranscriptSource for MockSource {
    async fn fetch(&self, _source: &str, language: &str) -> Result<RetrievedTranscript, RetrievalError> {
        let Some(content) = &self.captions else {
            return Err(RetrievalError::NoCaptions(language.to_string()));
        };

        let path = self
            .dir
            .join(format!("pending_{}.{}.vtt", uuid::Uuid::new_v4().simple(), language));
        tokio::fs::write(&path, content).await?;

        Ok(RetrievedTranscript {
            content: content.clone(),
            path,
        })
    }
}

/// Three cues, each one window (5 minutes) apart
pub const THREE_WINDOWS: &str = "WEBVTT
Kind: captions
Language: en

1
00:00:00.000 --> 00:00:04.000
[Music] ANNA: welcome to the show

2
00:06:00.000 --> 00:06:03.500
second window

3
00:12:00.000 --> 00:12:02.000
third window
";
