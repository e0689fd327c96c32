use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::generation::{GenerationBackend, OllamaClient};
use crate::retrieval::{TranscriptSource, YtDlpSource};
use crate::summary::{SummaryConfig, SummaryPipeline, TranscriptArchive};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded service configuration (defaults for requests)
    pub config: Arc<Config>,

    /// Generation backend, also queried for available models
    pub backend: Arc<dyn GenerationBackend>,

    /// Runs summarization requests
    pub pipeline: SummaryPipeline,
}

impl AppState {
    pub fn new(
        config: Config,
        source: Arc<dyn TranscriptSource>,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        let archive = TranscriptArchive::new(&config.transcripts.dir);
        let pipeline = SummaryPipeline::new(
            source,
            Arc::clone(&backend),
            archive,
            SummaryConfig::from(&config),
        );

        Self {
            config: Arc::new(config),
            backend,
            pipeline,
        }
    }

    /// Wire up the yt-dlp source and the Ollama client from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let backend = OllamaClient::new(
            &config.generation.base_url,
            Duration::from_secs(config.generation.timeout_secs),
        )
        .context("Failed to create generation client")?;

        let source = YtDlpSource::new(
            config.transcripts.yt_dlp_binary.clone(),
            config.transcripts.dir.clone(),
            Duration::from_secs(config.transcripts.retrieval_timeout_secs),
        );

        Ok(Self::new(config, Arc::new(source), Arc::new(backend)))
    }
}
