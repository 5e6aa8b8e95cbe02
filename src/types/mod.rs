//! Data types for the webhook buffer
//!
//! This module contains the records captured from webhooks and the
//! counters reported about the buffer holding them.

mod record;
mod stats;

pub use record::{EventRecord, Payload};
pub use stats::BufferStats;

/// Result type for server setup and I/O
pub type ServerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
