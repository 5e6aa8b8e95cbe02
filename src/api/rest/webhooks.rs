//! Webhook record and query endpoints

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::ApiError;
use crate::api::state::AppState;
use crate::buffer::Filters;
use crate::types::EventRecord;

/// POST / - Record a webhook
///
/// Decodes `{event, data, version}`, stores it, and echoes the raw body back.
pub async fn record_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let record: EventRecord = serde_json::from_slice(&body).map_err(ApiError::InvalidJson)?;

    debug!(
        event_type = %record.event_type,
        version = %record.version,
        fields = record.payload.len(),
        "recorded webhook"
    );
    state.buffer.push(record);

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// GET /query/:event_type - Recorded webhooks of one type, newest first
///
/// Every query parameter is an exact-match filter on a payload field;
/// for repeated parameters only the first value counts.
pub async fn query_webhooks(
    State(state): State<Arc<AppState>>,
    Path(event_type): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<EventRecord>>, ApiError> {
    if event_type.is_empty() {
        return Err(ApiError::MissingEventType);
    }

    let filters = Filters::from_query_pairs(params);
    let results = state.buffer.query(&event_type, &filters);
    debug!(
        event_type = %event_type,
        filters = filters.len(),
        matches = results.len(),
        "queried webhooks"
    );

    Ok(Json(results))
}

/// GET /query - No event type in the path
pub async fn missing_event_type() -> ApiError {
    ApiError::MissingEventType
}
