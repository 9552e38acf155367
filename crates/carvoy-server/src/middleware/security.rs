//! Security middleware for HTTP request protection.
//!
//! Applies CORS rules, standard security headers, response compression, and
//! request body size limits.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::http::header::{self, HeaderValue};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Maximum request body size for regular API calls (2 MB).
const DEFAULT_MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum request body size for photo uploads (64 MB across all parts).
pub const MAX_UPLOAD_BODY_SIZE: usize = 64 * 1024 * 1024;

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin (development only).
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',', default_value = "*")
    )]
    pub allowed_origins: Vec<String>,

    /// Whether to allow credentialed requests.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-allow-credentials", env = "CORS_ALLOW_CREDENTIALS")
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Returns whether the wildcard origin is configured.
    fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Builds the `tower-http` origin matcher for this configuration.
    fn allow_origin(&self) -> AllowOrigin {
        if self.allows_any_origin() {
            return AllowOrigin::any();
        }

        let origins = self
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect::<Vec<_>>();

        AllowOrigin::list(origins)
    }
}

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers security middlewares with the provided configuration.
    fn with_security(self, cors: &CorsConfig) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig) -> Self {
        let mut cors_layer = CorsLayer::new()
            .allow_origin(cors.allow_origin())
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600));

        // Credentials are incompatible with a wildcard origin.
        if cors.allow_credentials && !cors.allows_any_origin() {
            cors_layer = cors_layer.allow_credentials(true);
        }

        self.layer(DefaultBodyLimit::max(DEFAULT_MAX_BODY_SIZE))
            .layer(CompressionLayer::new())
            .layer(cors_layer)
            .layer(SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::REFERRER_POLICY,
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
    }
}
