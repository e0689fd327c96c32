//! Progressive transcript summarization
//!
//! A run downloads captions, splits them into time windows, asks the
//! generation backend for one summary per window (sequentially) and
//! streams progress events to the caller while it works:
//! - `pipeline`: the run itself, spawned on its own task
//! - `orchestrator`: per-chunk generation calls
//! - `progress` / `events`: the event protocol
//! - `archive`: stable names for processed transcripts

mod archive;
mod config;
mod error;
mod events;
mod orchestrator;
mod pipeline;
mod progress;
mod prompt;

pub use archive::{ArchivedTranscript, TranscriptArchive};
pub use config::SummaryConfig;
pub use error::SummaryError;
pub use events::{RunStage, SummaryEvent};
pub use orchestrator::{build_prompt, SummarizationOrchestrator};
pub use pipeline::{SummaryPipeline, SummaryRequest};
pub use progress::{event_stream, ProgressReporter, SummaryOutcome};
pub use prompt::{PromptTemplate, DEFAULT_PROMPT};
