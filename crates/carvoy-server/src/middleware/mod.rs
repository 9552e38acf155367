//! Middleware for `axum::Router` and HTTP request processing.
//!
//! Provides layered router extensions for:
//! - Security (CORS, headers, body limits, compression)
//! - Observability (tracing, request IDs)
//! - Recovery (panics, timeouts)

mod observability;
mod recovery;
mod security;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, MAX_UPLOAD_BODY_SIZE, RouterSecurityExt};
