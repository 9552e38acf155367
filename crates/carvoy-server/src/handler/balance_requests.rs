//! Balance request and ledger handlers.
//!
//! Dealers submit top-up requests with an optional payment receipt; admins
//! settle them exactly once. Approval credits the balance, appends a ledger
//! entry, and notifies the dealer inside one transaction.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use bigdecimal::BigDecimal;
use carvoy_opendal::StorageBackend;
use carvoy_postgres::PgClient;
use carvoy_postgres::model::{
    BalanceRequest, NewAccountNotification, NewBalanceRequest, NewBalanceTransaction,
    SettleBalanceRequest,
};
use carvoy_postgres::query::{
    AccountRepository, AccountNotificationRepository, BalanceRequestRepository,
    BalanceTransactionRepository,
};
use carvoy_postgres::scoped_futures::ScopedFutureExt;
use carvoy_postgres::types::{
    BalanceRequestFilter, BalanceRequestStatus, NotificationEvent, TransactionFilter,
    TransactionKind,
};
use jiff::Timestamp;

use crate::extract::{AuthState, Json, Multipart, Path, Query, ValidateJson};
use crate::handler::request::{
    BalanceRequestListParams, BalanceRequestPathParams, CreateBalanceRequestRequest,
    SettleBalanceRequestRequest, TransactionParams,
};
use crate::handler::response::{BalanceRequestView, BalanceTransactionView, ErrorResponse};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ImageProcessor, ServiceState};

/// Tracing target for balance operations.
const TRACING_TARGET: &str = "carvoy_server::handler::balance";

/// Maximum size of an uploaded receipt: 10 MB.
const MAX_RECEIPT_SIZE: usize = 10 * 1024 * 1024;

/// Lists balance requests; dealers are scoped to their own.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn list_balance_requests(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Query(params): Query<BalanceRequestListParams>,
) -> Result<(StatusCode, Json<Vec<BalanceRequestView>>)> {
    let mut filter = BalanceRequestFilter {
        dealer_id: params.dealer_id,
        status: params.status,
    };

    if !auth_state.is_admin() {
        filter.dealer_id = Some(auth_state.account_id);
    }

    let mut conn = pg_client.get_connection().await?;

    let requests = conn
        .list_balance_requests(filter, params.pagination().into())
        .await?;

    let response = requests.into_iter().map(BalanceRequestView::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

fn list_balance_requests_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List balance requests")
        .response::<200, Json<Vec<BalanceRequestView>>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Submits a new balance top-up request.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn create_balance_request(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateBalanceRequestRequest>,
) -> Result<(StatusCode, Json<BalanceRequestView>)> {
    auth_state.authorize_dealer()?;

    if request.amount <= BigDecimal::from(0) {
        return Err(ErrorKind::BadRequest
            .with_message("The requested amount must be positive")
            .into_static());
    }

    let mut conn = pg_client.get_connection().await?;

    let created = conn
        .create_balance_request(NewBalanceRequest {
            dealer_id: auth_state.account_id,
            amount: request.amount,
            receipt_path: None,
            dealer_note: request.note,
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %created.id,
        dealer_id = %created.dealer_id,
        amount = %created.amount,
        "balance request submitted"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

fn create_balance_request_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Submit balance request")
        .description("Submits a request to add funds to the dealer balance.")
        .response::<201, Json<BalanceRequestView>>()
        .response::<400, Json<ErrorResponse<'static>>>()
}

/// Returns a single balance request.
#[tracing::instrument(skip_all, fields(request_id = %path_params.request_id))]
async fn get_balance_request(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<BalanceRequestPathParams>,
) -> Result<(StatusCode, Json<BalanceRequestView>)> {
    let mut conn = pg_client.get_connection().await?;

    let request = find_balance_request(&mut conn, path_params.request_id).await?;
    auth_state.authorize_admin_or_owner(request.dealer_id)?;

    Ok((StatusCode::OK, Json(request.into())))
}

fn get_balance_request_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get balance request")
        .response::<200, Json<BalanceRequestView>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Attaches a payment receipt image to a pending request.
#[tracing::instrument(skip_all, fields(request_id = %path_params.request_id))]
async fn upload_receipt(
    State(pg_client): State<PgClient>,
    State(storage): State<StorageBackend>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<BalanceRequestPathParams>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<BalanceRequestView>)> {
    let mut conn = pg_client.get_connection().await?;

    let request = find_balance_request(&mut conn, path_params.request_id).await?;
    auth_state.authorize_admin_or_owner(request.dealer_id)?;

    if !request.is_pending() {
        return Err(ErrorKind::Conflict
            .with_message("This request has already been settled")
            .into_static());
    }

    let Some(field) = multipart.next_field().await.map_err(Multipart::field_error)? else {
        return Err(ErrorKind::BadRequest
            .with_message("The upload contained no file")
            .into_static());
    };

    let content_type = field
        .content_type()
        .map(str::to_owned)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    if !ImageProcessor::is_supported_content_type(&content_type) {
        return Err(ErrorKind::UnsupportedMediaType
            .with_message("Receipts must be JPEG, PNG, or WebP images")
            .into_static());
    }

    let data = field.bytes().await.map_err(Multipart::field_error)?;
    if data.len() > MAX_RECEIPT_SIZE {
        return Err(ErrorKind::PayloadTooLarge
            .with_context(format!(
                "receipts are limited to {} MB",
                MAX_RECEIPT_SIZE / (1024 * 1024)
            ))
            .into_static());
    }

    let extension = ImageProcessor::extension_for(&content_type).unwrap_or("bin");
    let receipt_path = format!("receipts/{}.{}", request.id, extension);
    storage.write(&receipt_path, &data).await?;

    let updated = conn
        .attach_receipt(request.id, receipt_path)
        .await?
        .ok_or_else(|| {
            ErrorKind::Conflict
                .with_message("This request has already been settled")
                .into_static()
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %updated.id,
        "receipt attached to balance request"
    );

    Ok((StatusCode::OK, Json(updated.into())))
}

fn upload_receipt_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Upload payment receipt")
        .response::<200, Json<BalanceRequestView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
        .response::<415, Json<ErrorResponse<'static>>>()
}

/// Approves a pending balance request.
///
/// Single transaction: settle guard, balance credit, ledger entry,
/// notification. A request settles exactly once.
#[tracing::instrument(skip_all, fields(request_id = %path_params.request_id))]
async fn approve_balance_request(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<BalanceRequestPathParams>,
    ValidateJson(request): ValidateJson<SettleBalanceRequestRequest>,
) -> Result<(StatusCode, Json<BalanceRequestView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_balance_request(&mut conn, path_params.request_id).await?;

    let admin_id = auth_state.account_id;
    let request_id = path_params.request_id;
    let admin_note = request.admin_note;

    let approved = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                let settled = conn
                    .settle_balance_request(
                        request_id,
                        SettleBalanceRequest {
                            current_status: BalanceRequestStatus::Approved,
                            admin_note,
                            processed_by: admin_id,
                            processed_at: Timestamp::now().into(),
                        },
                    )
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(already_settled)?;

                let account = conn
                    .adjust_balance(settled.dealer_id, settled.amount.clone())
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(|| {
                        // The dealer disappeared between review and approval.
                        ErrorKind::Conflict
                            .with_message("The dealer account is no longer active")
                            .into_static()
                    })?;

                conn.create_balance_transaction(NewBalanceTransaction {
                    account_id: settled.dealer_id,
                    kind: TransactionKind::TopUp,
                    amount: settled.amount.clone(),
                    balance_after: account.balance.clone(),
                    invoice_id: None,
                    balance_request_id: Some(settled.id),
                    note: None,
                    created_by: Some(admin_id),
                })
                .await
                .map_err(Error::from)?;

                conn.create_notification(NewAccountNotification {
                    account_id: settled.dealer_id,
                    event: NotificationEvent::BalanceApproved,
                    title: "Balance request approved".to_string(),
                    message: format!(
                        "{} was added to your balance; new balance is {}",
                        settled.amount, account.balance
                    ),
                    related_id: Some(settled.id),
                })
                .await
                .map_err(Error::from)?;

                Ok(settled)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %approved.id,
        dealer_id = %approved.dealer_id,
        amount = %approved.amount,
        approved_by = %auth_state.account_id,
        "balance request approved"
    );

    Ok((StatusCode::OK, Json(approved.into())))
}

fn approve_balance_request_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Approve balance request")
        .description(
            "Credits the dealer balance by the requested amount and records \
             the ledger entry; a request can be settled only once.",
        )
        .response::<200, Json<BalanceRequestView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Rejects a pending balance request.
#[tracing::instrument(skip_all, fields(request_id = %path_params.request_id))]
async fn reject_balance_request(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<BalanceRequestPathParams>,
    ValidateJson(request): ValidateJson<SettleBalanceRequestRequest>,
) -> Result<(StatusCode, Json<BalanceRequestView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_balance_request(&mut conn, path_params.request_id).await?;

    let admin_id = auth_state.account_id;
    let request_id = path_params.request_id;
    let admin_note = request.admin_note;

    let rejected = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                let settled = conn
                    .settle_balance_request(
                        request_id,
                        SettleBalanceRequest {
                            current_status: BalanceRequestStatus::Rejected,
                            admin_note: admin_note.clone(),
                            processed_by: admin_id,
                            processed_at: Timestamp::now().into(),
                        },
                    )
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(already_settled)?;

                conn.create_notification(NewAccountNotification {
                    account_id: settled.dealer_id,
                    event: NotificationEvent::BalanceRejected,
                    title: "Balance request rejected".to_string(),
                    message: match &settled.admin_note {
                        Some(note) => format!(
                            "Your request for {} was rejected: {}",
                            settled.amount, note
                        ),
                        None => format!("Your request for {} was rejected", settled.amount),
                    },
                    related_id: Some(settled.id),
                })
                .await
                .map_err(Error::from)?;

                Ok(settled)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %rejected.id,
        rejected_by = %auth_state.account_id,
        "balance request rejected"
    );

    Ok((StatusCode::OK, Json(rejected.into())))
}

fn reject_balance_request_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Reject balance request")
        .response::<200, Json<BalanceRequestView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Lists balance ledger entries.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn list_transactions(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Query(params): Query<TransactionParams>,
) -> Result<(StatusCode, Json<Vec<BalanceTransactionView>>)> {
    let mut filter = TransactionFilter {
        account_id: params.account_id,
        from: params.from,
        until: params.until,
    };

    if !auth_state.is_admin() {
        filter.account_id = Some(auth_state.account_id);
    }

    let mut conn = pg_client.get_connection().await?;

    let transactions = conn
        .list_balance_transactions(filter, params.pagination().into())
        .await?;

    let response = transactions
        .into_iter()
        .map(BalanceTransactionView::from)
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

fn list_transactions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List balance transactions")
        .description("Lists ledger entries, newest first; dealers see only their own.")
        .response::<200, Json<Vec<BalanceTransactionView>>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

fn already_settled() -> Error<'static> {
    ErrorKind::Conflict
        .with_message("This request has already been settled")
        .into_static()
}

/// Loads a balance request or reports 404.
async fn find_balance_request(
    conn: &mut carvoy_postgres::PgConn,
    request_id: uuid::Uuid,
) -> Result<BalanceRequest> {
    let request = conn
        .find_balance_request_by_id(request_id)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Balance request not found")
                .with_resource("balance_request")
                .into_static()
        })?;

    Ok(request)
}

/// Returns routes for balance management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/balance/requests",
            get_with(list_balance_requests, list_balance_requests_docs)
                .post_with(create_balance_request, create_balance_request_docs),
        )
        .api_route(
            "/balance/requests/{requestId}",
            get_with(get_balance_request, get_balance_request_docs),
        )
        .api_route(
            "/balance/requests/{requestId}/receipt",
            post_with(upload_receipt, upload_receipt_docs),
        )
        .api_route(
            "/balance/requests/{requestId}/approve",
            post_with(approve_balance_request, approve_balance_request_docs),
        )
        .api_route(
            "/balance/requests/{requestId}/reject",
            post_with(reject_balance_request, reject_balance_request_docs),
        )
        .api_route(
            "/balance/transactions",
            get_with(list_transactions, list_transactions_docs),
        )
        .with_path_items(|item| item.tag("Balance"))
}
