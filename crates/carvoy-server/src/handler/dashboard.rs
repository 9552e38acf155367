//! Dashboard handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::PgClient;
use carvoy_postgres::query::DashboardRepository;

use crate::extract::{AuthState, Json};
use crate::handler::response::{DealerDashboardView, ErrorResponse, PlatformDashboardView};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Returns the platform-wide dashboard for admins.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn get_platform_dashboard(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
) -> Result<(StatusCode, Json<PlatformDashboardView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let dashboard = conn.load_platform_dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard.into())))
}

fn get_platform_dashboard_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Platform dashboard")
        .description("Aggregate numbers across the whole platform.")
        .response::<200, Json<PlatformDashboardView>>()
        .response::<403, Json<ErrorResponse<'static>>>()
}

/// Returns the authenticated dealer's dashboard.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn get_dealer_dashboard(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
) -> Result<(StatusCode, Json<DealerDashboardView>)> {
    auth_state.authorize_dealer()?;

    let mut conn = pg_client.get_connection().await?;

    let dashboard = conn
        .load_dealer_dashboard(auth_state.account_id)
        .await?
        .ok_or_else(|| ErrorKind::Unauthorized.into_error())?;

    Ok((StatusCode::OK, Json(dashboard.into())))
}

fn get_dealer_dashboard_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Dealer dashboard")
        .description("Aggregate numbers for the authenticated dealer.")
        .response::<200, Json<DealerDashboardView>>()
        .response::<403, Json<ErrorResponse<'static>>>()
}

/// Returns routes for dashboards.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/dashboard",
            get_with(get_platform_dashboard, get_platform_dashboard_docs),
        )
        .api_route(
            "/dashboard/dealer",
            get_with(get_dealer_dashboard, get_dealer_dashboard_docs),
        )
        .with_path_items(|item| item.tag("Dashboard"))
}
