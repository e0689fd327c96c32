use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

use super::{RetrievalError, RetrievedTranscript, TranscriptSource};

/// Downloads captions with the `yt-dlp` command line tool
///
/// Both uploaded and automatic captions are requested; only the WebVTT
/// file for the requested language is read back.
pub struct YtDlpSource {
    binary: String,
    transcripts_dir: PathBuf,
    timeout: Duration,
}

impl YtDlpSource {
    pub fn new(binary: impl Into<String>, transcripts_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            transcripts_dir: transcripts_dir.into(),
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl TranscriptSource for YtDlpSource {
    async fn fetch(&self, source: &str, language: &str) -> Result<RetrievedTranscript, RetrievalError> {
        tokio::fs::create_dir_all(&self.transcripts_dir).await?;

        // Fresh working name per run; yt-dlp appends ".<lang>.vtt"
        let stem = format!("pending_{}", uuid::Uuid::new_v4().simple());
        let template = self.transcripts_dir.join(format!("{}.%(ext)s", stem));

        info!("Downloading {} captions for {}", language, source);

        let mut command = Command::new(&self.binary);
        command
            .arg("--write-subs")
            .arg("--write-auto-subs")
            .arg("--sub-langs")
            .arg(language)
            .arg("--sub-format")
            .arg("vtt")
            .arg("--skip-download")
            .arg("--no-playlist")
            .arg("-o")
            .arg(&template)
            .arg("--")
            .arg(source)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| RetrievalError::Timeout(self.timeout))?
            .map_err(|e| RetrievalError::Downloader(format!("failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RetrievalError::Downloader(stderr.trim().to_string()));
        }
        debug!("yt-dlp output: {}", String::from_utf8_lossy(&output.stdout));

        let path = self.transcripts_dir.join(format!("{}.{}.vtt", stem, language));
        if !tokio::fs::try_exists(&path).await? {
            return Err(RetrievalError::NoCaptions(language.to_string()));
        }

        let content = tokio::fs::read_to_string(&path).await?;
        info!("Captions saved to {:?} ({} bytes)", path, content.len());

        Ok(RetrievedTranscript { content, path })
    }
}
