//! API module for HTTP endpoints
//!
//! Thin axum facade translating requests into buffer pushes and queries.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use rest::ApiError;
pub use state::AppState;
