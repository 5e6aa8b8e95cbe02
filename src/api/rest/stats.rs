//! Buffer statistics endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;

/// Response for GET /stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub capacity: usize,
    pub stored: usize,
    pub total_pushed: u64,
    /// Records silently dropped by overwrite
    pub overwritten: u64,
    pub started_at: i64,
}

/// GET /stats - Buffer occupancy and overwrite counters
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = state.buffer.stats();

    Json(StatsResponse {
        capacity: stats.capacity,
        stored: stats.stored,
        total_pushed: stats.total_pushed,
        overwritten: stats.overwritten(),
        started_at: state.started_at,
    })
}
