use futures::stream::Stream;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::archive::TranscriptArchive;
use super::config::SummaryConfig;
use super::error::SummaryError;
use super::events::{RunStage, SummaryEvent};
use super::orchestrator::SummarizationOrchestrator;
use super::progress::{event_stream, ProgressReporter, SummaryOutcome};
use super::prompt::PromptTemplate;
use crate::generation::GenerationBackend;
use crate::retrieval::TranscriptSource;
use crate::transcript::{ChunkConfig, Chunker};

/// One caller request
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// Video URL or id handed to the transcript source
    pub source: String,
    pub model: String,
    pub language: String,
    /// Replaces the configured base prompt when set
    pub prompt_template: Option<String>,
}

/// Download → chunk → summarize → archive, reported as a stream of events
#[derive(Clone)]
pub struct SummaryPipeline {
    source: Arc<dyn TranscriptSource>,
    orchestrator: Arc<SummarizationOrchestrator>,
    archive: TranscriptArchive,
    config: SummaryConfig,
}

impl SummaryPipeline {
    pub fn new(
        source: Arc<dyn TranscriptSource>,
        backend: Arc<dyn GenerationBackend>,
        archive: TranscriptArchive,
        config: SummaryConfig,
    ) -> Self {
        let orchestrator = Arc::new(SummarizationOrchestrator::new(
            backend,
            config.generation_timeout,
        ));

        Self {
            source,
            orchestrator,
            archive,
            config,
        }
    }

    pub fn archive(&self) -> &TranscriptArchive {
        &self.archive
    }

    /// Start a run on its own task and return its events as they happen
    pub fn spawn(&self, request: SummaryRequest) -> impl Stream<Item = SummaryEvent> + Send + 'static {
        let (reporter, rx) = ProgressReporter::channel(self.config.event_buffer);
        let pipeline = self.clone();

        tokio::spawn(async move {
            pipeline.run(request, reporter).await;
        });

        event_stream(rx)
    }

    /// Execute a run to completion, ending with exactly one terminal event
    pub async fn run(&self, request: SummaryRequest, mut reporter: ProgressReporter) {
        let mut working = None;
        let outcome = AssertUnwindSafe(self.execute(&request, &mut reporter, &mut working))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(SummaryError::Internal(panic_message(&*panic))));

        // Failed runs leave the downloaded file behind
        if let (Err(_), Some(path)) = (&outcome, working) {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                warn!("Failed to remove working transcript {:?}: {}", path, e);
            }
        }

        reporter.finish(outcome).await;
    }

    /// `working` holds the downloaded file until it has been archived
    async fn execute(
        &self,
        request: &SummaryRequest,
        reporter: &mut ProgressReporter,
        working: &mut Option<PathBuf>,
    ) -> Result<SummaryOutcome, SummaryError> {
        let template = PromptTemplate::parse(
            request
                .prompt_template
                .as_deref()
                .unwrap_or(&self.config.base_prompt),
        )?;

        info!("Summarizing {} ({}, {})", request.source, request.language, request.model);

        reporter.stage(RunStage::Downloading).await?;
        let transcript = self.source.fetch(&request.source, &request.language).await?;
        *working = Some(transcript.path.clone());
        reporter.stage(RunStage::Downloaded).await?;

        let chunk_config = ChunkConfig {
            chunk_duration: self.config.chunk_duration,
        };
        let document = Chunker::chunk(chunk_config, &transcript.content);
        reporter.stage(RunStage::Chunking).await?;

        let combined = self
            .orchestrator
            .summarize(&document, &request.model, &template, reporter)
            .await?;

        reporter.stage(RunStage::Finalizing).await?;
        let archived = self
            .archive
            .archive(&transcript.path)
            .await
            .map_err(SummaryError::Archive)?;
        *working = None;
        let summary = if combined.is_empty() {
            String::new()
        } else {
            markdown::to_html(&combined)
        };
        reporter.stage(RunStage::Done).await?;

        Ok(SummaryOutcome {
            summary,
            transcript_link: archived.link(),
        })
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "summarization task panicked".to_string())
}
