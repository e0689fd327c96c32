use std::path::{Path, PathBuf};
use tracing::info;

/// Stable storage for processed transcripts
///
/// Working files are renamed (not copied) to `transcript_<uuid>.<ext>`, so
/// concurrent runs never collide and no locking is needed.
#[derive(Debug, Clone)]
pub struct TranscriptArchive {
    dir: PathBuf,
}

/// A transcript moved into the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedTranscript {
    pub file_name: String,
}

impl ArchivedTranscript {
    /// HTTP path the transcript can be downloaded from
    pub fn link(&self) -> String {
        format!("/transcript/{}", self.file_name)
    }
}

impl TranscriptArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Move a working file into the archive under a fresh name
    pub async fn archive(&self, working: &Path) -> std::io::Result<ArchivedTranscript> {
        let extension = working
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("vtt");
        let file_name = format!("transcript_{}.{}", uuid::Uuid::new_v4().simple(), extension);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::rename(working, self.dir.join(&file_name)).await?;

        info!("Archived transcript {:?} as {}", working, file_name);

        Ok(ArchivedTranscript { file_name })
    }

    /// Path of an archived transcript, or None if the name could escape the archive
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let valid = !file_name.is_empty()
            && !file_name.starts_with('.')
            && !file_name.contains(|c: char| c == '/' || c == '\\')
            && !file_name.contains("..");

        valid.then(|| self.dir.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_traversal() {
        let archive = TranscriptArchive::new("/data/transcripts");
        assert!(archive.resolve("../etc/passwd").is_none());
        assert!(archive.resolve("a/b.vtt").is_none());
        assert!(archive.resolve(".hidden").is_none());
        assert!(archive.resolve("").is_none());
        assert_eq!(
            archive.resolve("transcript_abc.vtt"),
            Some(PathBuf::from("/data/transcripts/transcript_abc.vtt"))
        );
    }
}
