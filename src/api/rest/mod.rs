//! REST API module for HTTP endpoints
//!
//! - `POST /` (or any unrouted path) - Record a webhook
//! - `GET /query/:event_type` - Query recorded webhooks
//! - `GET /stats` - Buffer counters

pub mod stats;
pub mod webhooks;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

/// Client errors reported by the facade, rendered as plain text
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Event type is required")]
    MissingEventType,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::MissingEventType => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidJson(e) => warn!(error = %e, "rejected webhook body"),
            ApiError::MissingEventType => warn!("query without event type"),
        }
        (self.status(), self.to_string()).into_response()
    }
}
