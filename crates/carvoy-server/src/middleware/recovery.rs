//! Recovery middleware for handling errors, panics, and timeouts.
//!
//! Converts request timeouts, handler panics, and Tower service errors into
//! proper HTTP error responses instead of dropped connections.

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::catch_panic::CatchPanicLayer;

use crate::handler::ErrorKind;

/// Tracing target for panic recovery.
const TRACING_TARGET_PANIC: &str = "carvoy_server::recovery::panic";

/// Configuration for recovery middleware behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RecoveryConfig {
    /// Maximum duration in seconds to wait for a request to complete before
    /// timing out.
    #[cfg_attr(
        feature = "config",
        arg(long = "request-timeout-secs", env = "REQUEST_TIMEOUT_SECS", default_value = "30")
    )]
    pub request_timeout_secs: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl RecoveryConfig {
    /// Returns the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Extension trait for `axum::`[`Router`] to apply recovery middleware.
pub trait RouterRecoveryExt<S> {
    /// Layers recovery middleware with the provided configuration.
    fn with_recovery(self, config: &RecoveryConfig) -> Self;
}

impl<S> RouterRecoveryExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_recovery(self, config: &RecoveryConfig) -> Self {
        self.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
    }
}

/// Converts Tower service errors (including timeouts) into HTTP responses.
async fn handle_middleware_error(error: tower::BoxError) -> Response {
    if error.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!(
            target: "carvoy_server::recovery",
            "request timed out"
        );
        return (
            StatusCode::REQUEST_TIMEOUT,
            ErrorKind::InternalServerError
                .with_message("The request took too long to complete"),
        )
            .into_response();
    }

    tracing::error!(
        target: "carvoy_server::recovery",
        error = %error,
        "middleware error"
    );
    ErrorKind::InternalServerError.into_response()
}

/// Converts handler panics into 500 responses.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(
        target: TRACING_TARGET_PANIC,
        panic = %detail,
        "handler panicked"
    );

    ErrorKind::InternalServerError.into_response()
}
