//! Webhook Buffer
//!
//! A capture-and-replay webhook receiver for debugging and testing.
//! Incoming webhooks are kept in a bounded in-memory ring; once it is full
//! the oldest webhook is silently overwritten.
//!
//! # Features
//!
//! - **Bounded**: fixed capacity, O(1) push, memory never grows
//! - **Thread-Safe**: single-writer / multi-reader `RwLock`
//! - **Filtered Queries**: exact-match on payload fields, newest first
//!
//! # Modules
//!
//! - `types`: Captured records and buffer statistics
//! - `buffer`: The ring buffer, filters, and value stringification
//! - `api`: Axum router and handlers
//! - `config`: Environment-based server configuration
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use webhook_buffer::{EventBuffer, EventRecord, Filters};
//!
//! let buffer = EventBuffer::new(NonZeroUsize::new(100).unwrap());
//! buffer.push(EventRecord::new("order", Default::default(), "1"));
//!
//! let orders = buffer.query("order", &Filters::new());
//! assert_eq!(orders.len(), 1);
//! ```

pub mod api;
pub mod buffer;
pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use buffer::{EventBuffer, Filters};
pub use config::ServerConfig;
pub use types::{BufferStats, EventRecord, Payload, ServerResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
