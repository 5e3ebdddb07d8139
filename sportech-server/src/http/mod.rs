//! HTTP server layer
//!
//! Axum server with:
//! - One list/get route pair per catalog collection
//! - Request tracing and a per-request timeout
//! - Graceful shutdown
//! - JSON error envelope

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
