use std::time::Duration;

use super::prompt::DEFAULT_PROMPT;
use crate::config::Config;

/// Settings shared by every summarization run
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Width of each summarized window
    /// Default: 300 seconds (5 minutes)
    pub chunk_duration: Duration,

    /// Upper bound on a single generation call
    pub generation_timeout: Duration,

    /// Prompt used when the caller does not supply one
    pub base_prompt: String,

    /// Capacity of the progress event channel
    pub event_buffer: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            chunk_duration: Duration::from_secs(300), // 5 minutes
            generation_timeout: Duration::from_secs(120),
            base_prompt: DEFAULT_PROMPT.to_string(),
            event_buffer: 16,
        }
    }
}

impl From<&Config> for SummaryConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            chunk_duration: Duration::from_secs(cfg.transcripts.chunk_duration_secs),
            generation_timeout: Duration::from_secs(cfg.generation.timeout_secs),
            base_prompt: cfg.prompt.base_prompt.clone(),
            ..Self::default()
        }
    }
}
