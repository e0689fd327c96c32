// Progress event emission for a summarization run
//
// The run task owns a `ProgressReporter` (sending half of a bounded channel);
// the caller drains the receiving half as a stream. `finish` consumes the
// reporter, so the terminal event is always the last one sent.

use futures::stream::{self, Stream};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::error::SummaryError;
use super::events::{RunStage, SummaryEvent};

/// Successful result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    /// Rendered HTML summary
    pub summary: String,
    /// Retrieval path of the archived transcript
    pub transcript_link: String,
}

pub struct ProgressReporter {
    tx: mpsc::Sender<SummaryEvent>,
    last_percent: u8,
}

impl ProgressReporter {
    /// Create a reporter and the receiver its events are delivered to
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SummaryEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx, last_percent: 0 }, rx)
    }

    /// Report that the run has reached `stage`
    pub async fn stage(&mut self, stage: RunStage) -> Result<(), SummaryError> {
        self.progress(stage.percent(), stage.message()).await
    }

    /// Emit a progress event; percent never goes backwards
    pub async fn progress(&mut self, percent: u8, message: String) -> Result<(), SummaryError> {
        let percent = percent.clamp(self.last_percent, 100);
        self.last_percent = percent;

        self.tx
            .send(SummaryEvent::Progress { percent, message })
            .await
            .map_err(|_| SummaryError::Cancelled)
    }

    /// Whether the caller has stopped listening
    pub fn is_cancelled(&self) -> bool {
        self.tx.is_closed()
    }

    /// Emit the terminal event for `outcome`
    pub async fn finish(self, outcome: Result<SummaryOutcome, SummaryError>) {
        let event = match outcome {
            Ok(outcome) => {
                info!("Summarization complete: {}", outcome.transcript_link);
                SummaryEvent::Result {
                    summary: outcome.summary,
                    transcript_reference: outcome.transcript_link,
                }
            }
            Err(SummaryError::Cancelled) => {
                info!("Caller disconnected, summarization abandoned");
                return;
            }
            Err(e) => {
                error!("Summarization failed: {}", e);
                SummaryEvent::Error {
                    message: e.to_string(),
                }
            }
        };

        if self.tx.send(event).await.is_err() {
            warn!("Caller disconnected before the final event was delivered");
        }
    }
}

/// Turn the receiving half into a stream that ends when the run finishes
pub fn event_stream(rx: mpsc::Receiver<SummaryEvent>) -> impl Stream<Item = SummaryEvent> + Send + 'static {
    stream::unfold(rx, |mut rx| async move {
        let event = rx.recv().await?;
        Some((event, rx))
    })
}
