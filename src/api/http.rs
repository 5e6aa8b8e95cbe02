//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{stats, webhooks};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Webhook senders and browser tooling post from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", post(webhooks::record_webhook))
        .route("/query", get(webhooks::missing_event_type))
        .route("/query/", get(webhooks::missing_event_type))
        .route("/query/:event_type", get(webhooks::query_webhooks))
        .route("/health", get(health_check))
        .route("/stats", get(stats::get_stats))
        .fallback(fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Record POSTs to any other path; everything else is unknown
async fn fallback(state: State<Arc<AppState>>, method: Method, body: Bytes) -> Response {
    if method == Method::POST {
        webhooks::record_webhook(state, body).await.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
