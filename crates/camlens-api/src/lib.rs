//! Axum HTTP API for camera and shot analysis.
//!
//! This crate provides:
//! - `POST /api/analyze-camera`: annotation JSON in, per-shot reports out
//! - Health, readiness and Prometheus metrics endpoints
//! - Request IDs, request logging, security headers and CORS

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
