pub mod config;
pub mod generation;
pub mod http;
pub mod retrieval;
pub mod summary;
pub mod transcript;

pub use config::Config;
pub use generation::{GenerationBackend, GenerationError, GenerationRequest, OllamaClient};
pub use http::{create_router, AppState};
pub use retrieval::{RetrievalError, RetrievedTranscript, TranscriptSource, YtDlpSource};
pub use summary::{
    SummarizationOrchestrator, SummaryConfig, SummaryError, SummaryEvent, SummaryPipeline,
    SummaryRequest, TranscriptArchive,
};
pub use transcript::{Chunk, ChunkConfig, Chunker, Timestamp, TranscriptDocument};
