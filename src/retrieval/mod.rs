//! Transcript retrieval from remote video sources
//!
//! A `TranscriptSource` downloads the captions for one video in one language
//! into the transcripts directory under a transient working name. The
//! summarization run later archives that file under a stable name.

mod ytdlp;

pub use ytdlp::YtDlpSource;

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Raw caption text plus the file it was written to
#[derive(Debug, Clone)]
pub struct RetrievedTranscript {
    pub content: String,
    /// Transient working file inside the transcripts directory
    pub path: PathBuf,
}

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("No subtitles found for language: {0}")]
    NoCaptions(String),

    #[error("caption download timed out after {0:?}")]
    Timeout(Duration),

    #[error("caption download failed: {0}")]
    Downloader(String),

    #[error("failed to read captions: {0}")]
    Io(#[from] std::io::Error),
}

/// Transcript source trait
#[async_trait::async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch captions for `source` (a video URL or id) in `language`
    async fn fetch(&self, source: &str, language: &str) -> Result<RetrievedTranscript, RetrievalError>;
}
