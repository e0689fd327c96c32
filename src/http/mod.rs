//! HTTP API server
//!
//! This module provides the REST API around the summarization pipeline:
//! - POST /summarize - Summarize a video's captions (NDJSON progress stream)
//! - GET /transcript/:filename - Download an archived transcript
//! - GET /models - Models available on the generation backend
//! - GET /base_prompt - Default summarization prompt
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::SummarizeRequest;
pub use routes::create_router;
pub use state::AppState;
