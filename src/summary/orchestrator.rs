use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::error::SummaryError;
use super::events::RunStage;
use super::progress::ProgressReporter;
use super::prompt::PromptTemplate;
use crate::generation::{GenerationBackend, GenerationError, GenerationRequest};
use crate::transcript::{sanitize, Chunk, TranscriptDocument};

/// Summarizes a transcript one chunk at a time
///
/// Chunks are submitted strictly in order, one call in flight at a time.
/// The first failed call aborts the run; later chunks are never submitted.
pub struct SummarizationOrchestrator {
    backend: Arc<dyn GenerationBackend>,
    timeout: Duration,
}

impl SummarizationOrchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Summarize every chunk and join the sections into one markdown document
    pub async fn summarize(
        &self,
        document: &TranscriptDocument,
        model: &str,
        template: &PromptTemplate,
        reporter: &mut ProgressReporter,
    ) -> Result<String, SummaryError> {
        let total = document.len();
        let mut sections = Vec::with_capacity(total);

        info!("Summarizing {} chunks with {}", total, model);

        for (index, chunk) in document.iter().enumerate() {
            reporter
                .stage(RunStage::Summarizing {
                    chunk: index + 1,
                    total,
                })
                .await?;

            if reporter.is_cancelled() {
                return Err(SummaryError::Cancelled);
            }

            let summary = self.summarize_chunk(chunk, model, template).await?;
            sections.push(format!("## {} - {}\n\n{}", chunk.start, chunk.end, summary));
        }

        Ok(sections.join("\n\n"))
    }

    /// Submit a single chunk to the generation backend
    pub async fn summarize_chunk(
        &self,
        chunk: &Chunk,
        model: &str,
        template: &PromptTemplate,
    ) -> Result<String, GenerationError> {
        let request = GenerationRequest {
            model: model.to_string(),
            prompt: build_prompt(template, chunk),
        };

        debug!("Submitting chunk {} - {}", chunk.start, chunk.end);

        tokio::time::timeout(self.timeout, self.backend.generate(&request))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))?
    }
}

/// Time-scoped instructions followed by the sanitized chunk text
pub fn build_prompt(template: &PromptTemplate, chunk: &Chunk) -> String {
    format!(
        "{}\n\n{}",
        template.render(&chunk.start.to_string(), &chunk.end.to_string()),
        sanitize(&chunk.text)
    )
}
