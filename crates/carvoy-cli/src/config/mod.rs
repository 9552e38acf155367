//! Command-line and environment configuration.

mod server;

use clap::Parser;
use carvoy_server::middleware::{CorsConfig, RecoveryConfig};
use carvoy_server::service::ServiceConfig;
pub use server::ServerConfig;

use crate::TRACING_TARGET_CONFIG;

/// Carvoy vehicle import and dealer management server.
#[derive(Debug, Parser)]
#[command(name = "carvoy", version, about)]
pub struct Cli {
    /// HTTP server settings.
    #[command(flatten)]
    pub server: ServerConfig,

    /// Service settings (database, storage, auth).
    #[command(flatten)]
    pub service: ServiceConfig,

    /// Middleware settings.
    #[command(flatten)]
    pub middleware: MiddlewareConfig,
}

/// Middleware configuration grouped for the CLI.
#[derive(Debug, Clone, clap::Args)]
pub struct MiddlewareConfig {
    /// CORS settings.
    #[command(flatten)]
    pub cors: CorsConfig,

    /// Recovery settings.
    #[command(flatten)]
    pub recovery: RecoveryConfig,
}

/// Logs the effective server configuration at startup.
pub fn log_server_config(config: &ServerConfig) {
    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        host = %config.host,
        port = config.port,
        "server configuration"
    );
}

/// Logs the effective middleware configuration at startup.
pub fn log_middleware_config(config: &MiddlewareConfig) {
    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        cors_origins = ?config.cors.allowed_origins,
        cors_credentials = config.cors.allow_credentials,
        request_timeout_secs = config.recovery.request_timeout_secs,
        "middleware configuration"
    );
}
