//! Account notification handlers.
//!
//! This module provides handlers for viewing account notifications.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::PgClient;
use carvoy_postgres::query::AccountNotificationRepository;

use crate::extract::{AuthState, Json, Path, Query};
use crate::handler::request::{NotificationPathParams, PaginationParams};
use crate::handler::response::{ErrorResponse, Notification, UnreadStatus};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for notification operations.
const TRACING_TARGET: &str = "carvoy_server::handler::notifications";

/// Lists notifications for the authenticated account and marks them as read.
#[tracing::instrument(
    skip_all,
    fields(account_id = %auth_state.account_id)
)]
async fn list_notifications(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Query(pagination): Query<PaginationParams>,
) -> Result<(StatusCode, Json<Vec<Notification>>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing notifications");

    let mut conn = pg_client.get_connection().await?;

    let notifications = conn
        .list_notifications(auth_state.account_id, pagination.into())
        .await?;

    // Mark all unread notifications as read
    let unread_count = conn
        .mark_all_notifications_read(auth_state.account_id)
        .await?;

    if unread_count > 0 {
        tracing::debug!(
            target: TRACING_TARGET,
            unread_count,
            "Marked notifications as read"
        );
    }

    let response: Vec<Notification> = notifications.into_iter().map(Into::into).collect();

    tracing::debug!(
        target: TRACING_TARGET,
        notification_count = response.len(),
        "Notifications listed"
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_notifications_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List notifications")
        .description(
            "Returns notifications for the authenticated account and marks them as read.",
        )
        .response::<200, Json<Vec<Notification>>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Returns the count of unread notifications for the authenticated account.
#[tracing::instrument(
    skip_all,
    fields(account_id = %auth_state.account_id)
)]
async fn get_unread_status(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
) -> Result<(StatusCode, Json<UnreadStatus>)> {
    let mut conn = pg_client.get_connection().await?;

    let unread_count = conn
        .count_unread_notifications(auth_state.account_id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadStatus { unread_count })))
}

fn get_unread_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get unread notifications count")
        .description("Returns the number of unread notifications for the authenticated account.")
        .response::<200, Json<UnreadStatus>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Deletes one of the authenticated account's notifications.
#[tracing::instrument(
    skip_all,
    fields(account_id = %auth_state.account_id, notification_id = %path_params.notification_id)
)]
async fn delete_notification(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<NotificationPathParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let deleted = conn
        .delete_notification(auth_state.account_id, path_params.notification_id)
        .await?;

    if !deleted {
        return Err(ErrorKind::NotFound
            .with_resource("notification")
            .into_static());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_notification_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete notification")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Returns routes for notification management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/notifications",
            get_with(list_notifications, list_notifications_docs),
        )
        .api_route(
            "/notifications/unread",
            get_with(get_unread_status, get_unread_status_docs),
        )
        .api_route(
            "/notifications/{notificationId}",
            delete_with(delete_notification, delete_notification_docs),
        )
        .with_path_items(|item| item.tag("Notifications"))
}
