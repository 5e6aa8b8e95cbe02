//! HTTP application state

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::buffer::EventBuffer;

/// Shared state handed to every request handler
pub struct AppState {
    /// The webhook buffer, one per process
    pub buffer: Arc<EventBuffer>,

    /// Unix timestamp of server start
    pub started_at: i64,
}

impl AppState {
    /// Create state around an existing buffer
    pub fn new(buffer: Arc<EventBuffer>) -> Self {
        Self {
            buffer,
            started_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Create state with a fresh buffer of `capacity` slots
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::new(Arc::new(EventBuffer::new(capacity)))
    }
}
