pub mod backend;
pub mod error;
pub mod ollama;

pub use backend::{GenerationBackend, GenerationRequest};
pub use error::GenerationError;
pub use ollama::OllamaClient;
