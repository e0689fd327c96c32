use super::state::AppState;
use crate::summary::SummaryRequest;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Video URL handed to the transcript source
    pub video_url: String,

    /// Model identifier (default: configured default model)
    pub model: Option<String>,

    /// Replacement prompt with {start_time} and {end_time} placeholders
    pub custom_base_prompt: Option<String>,

    /// Caption language code (default: configured default language)
    pub subtitle_lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<serde_json::Value>,
    pub default_model: String,
}

#[derive(Debug, Serialize)]
pub struct BasePromptResponse {
    pub base_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /summarize
/// Summarize a video's captions, streaming progress as NDJSON
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let request = SummaryRequest {
        source: req.video_url,
        model: non_empty(req.model)
            .unwrap_or_else(|| state.config.generation.default_model.clone()),
        language: non_empty(req.subtitle_lang)
            .unwrap_or_else(|| state.config.transcripts.default_language.clone()),
        prompt_template: non_empty(req.custom_base_prompt),
    };

    info!("Summarization requested for {}", request.source);

    let lines = state
        .pipeline
        .spawn(request)
        .map(|event| event.to_json_line());

    (
        [(header::CONTENT_TYPE, "application/x-ndjson")],
        Body::from_stream(lines),
    )
        .into_response()
}

/// GET /transcript/:filename
/// Download an archived transcript
pub async fn serve_transcript(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    let Some(path) = state.pipeline.archive().resolve(&filename) else {
        warn!("Rejected transcript name: {:?}", filename);
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid transcript name: {}", filename),
        );
    };

    match tokio::fs::read(&path).await {
        Ok(content) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/vtt; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            content,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => error_response(
            StatusCode::NOT_FOUND,
            format!("Transcript {} not found", filename),
        ),
        Err(e) => {
            error!("Failed to read transcript {:?}: {}", path, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read transcript: {}", e),
            )
        }
    }
}

/// GET /models
/// List models available on the generation backend
pub async fn list_models(State(state): State<AppState>) -> impl IntoResponse {
    match state.backend.list_models().await {
        Ok(models) => (
            StatusCode::OK,
            Json(ModelsResponse {
                models,
                default_model: state.config.generation.default_model.clone(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error fetching models: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching models: {}", e),
            )
        }
    }
}

/// GET /base_prompt
/// The prompt used when a request does not supply its own
pub async fn base_prompt(State(state): State<AppState>) -> impl IntoResponse {
    Json(BasePromptResponse {
        base_prompt: state.config.prompt.base_prompt.clone(),
    })
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "healthy" })))
}
