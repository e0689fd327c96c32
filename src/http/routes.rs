use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Summarization
        .route("/summarize", post(handlers::summarize))
        .route("/transcript/:filename", get(handlers::serve_transcript))
        // Backend queries
        .route("/models", get(handlers::list_models))
        .route("/base_prompt", get(handlers::base_prompt));

    if let Some(dir) = &state.config.service.http.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors_layer(&state.config.service.http.allowed_origins))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
