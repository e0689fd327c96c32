use serde::{Deserialize, Serialize};

/// One line of the summarization progress stream
///
/// Serialized untagged, so each variant maps onto the wire objects
/// `{"progress","message"}`, `{"summary","transcript_link"}` and `{"error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryEvent {
    Progress {
        #[serde(rename = "progress")]
        percent: u8,
        message: String,
    },
    Result {
        /// Rendered HTML
        summary: String,
        #[serde(rename = "transcript_link")]
        transcript_reference: String,
    },
    Error {
        #[serde(rename = "error")]
        message: String,
    },
}

impl SummaryEvent {
    /// Whether this event ends the stream
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SummaryEvent::Progress { .. })
    }

    /// Newline-terminated JSON encoding
    pub fn to_json_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}

/// Checkpoints of a summarization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Downloading,
    Downloaded,
    Chunking,
    /// About to submit chunk `chunk` (1-based) of `total`
    Summarizing { chunk: usize, total: usize },
    Finalizing,
    Done,
}

impl RunStage {
    pub fn percent(&self) -> u8 {
        match *self {
            RunStage::Downloading => 10,
            RunStage::Downloaded => 20,
            RunStage::Chunking => 30,
            // Spread across 30..=80
            RunStage::Summarizing { chunk, total } => {
                let total = total.max(1);
                (30 + chunk.min(total) * 50 / total) as u8
            }
            RunStage::Finalizing => 90,
            RunStage::Done => 100,
        }
    }

    pub fn message(&self) -> String {
        match *self {
            RunStage::Downloading => "Downloading subtitles...".to_string(),
            RunStage::Downloaded => "Subtitles downloaded".to_string(),
            RunStage::Chunking => "Preprocessing subtitles...".to_string(),
            RunStage::Summarizing { chunk, total } => {
                format!("Summarizing chunk {}/{}...", chunk, total)
            }
            RunStage::Finalizing => "Finalizing...".to_string(),
            RunStage::Done => "Complete!".to_string(),
        }
    }

    pub fn event(&self) -> SummaryEvent {
        SummaryEvent::Progress {
            percent: self.percent(),
            message: self.message(),
        }
    }
}
