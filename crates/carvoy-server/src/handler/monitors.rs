//! Health monitoring handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::PgClient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extract::Json;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for health checks.
const TRACING_TARGET: &str = "carvoy_server::handler::monitors";

/// Health report of the service and its dependencies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    /// Overall status: `ok` or `degraded`.
    status: String,
    /// Whether the database pool responds.
    database: bool,
}

/// Reports service health including dependency checks.
async fn health(State(pg_client): State<PgClient>) -> Result<(StatusCode, Json<HealthStatus>)> {
    let database = pg_client.get_connection().await.is_ok();

    let status = if database {
        StatusCode::OK
    } else {
        tracing::warn!(target: TRACING_TARGET, "health check failed: database unavailable");
        StatusCode::SERVICE_UNAVAILABLE
    };

    let report = HealthStatus {
        status: (if database { "ok" } else { "degraded" }).to_string(),
        database,
    };

    Ok((status, Json(report)))
}

fn health_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Reports service health including dependency checks.")
        .response::<200, Json<HealthStatus>>()
}

/// Liveness probe; returns as long as the process is serving requests.
async fn live() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn live_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Liveness probe")
        .description("Always succeeds while the process serves requests.")
        .response::<204, ()>()
}

/// Returns routes for health monitoring.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health, health_docs))
        .api_route("/health/live", get_with(live, live_docs))
        .with_path_items(|item| item.tag("Monitors"))
}
