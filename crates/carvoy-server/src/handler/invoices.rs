//! Invoice handlers.
//!
//! Admins create, issue, and cancel invoices; dealers pay them from their
//! balance. Every settlement path is a guarded single transaction so the
//! balance debit, ledger entry, and notification apply exactly once.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use bigdecimal::BigDecimal;
use carvoy_postgres::PgClient;
use carvoy_postgres::model::{
    Invoice, NewAccountNotification, NewBalanceTransaction, NewInvoice, NewInvoiceItem,
};
use carvoy_postgres::query::{
    AccountRepository, AccountNotificationRepository, BalanceTransactionRepository,
    InvoiceRepository,
};
use carvoy_postgres::scoped_futures::ScopedFutureExt;
use carvoy_postgres::types::{
    InvoiceFilter, NotificationEvent, PaymentMethod, TransactionKind,
};

use crate::extract::{AuthState, Json, Path, Query, ValidateJson};
use crate::handler::request::{
    CreateInvoiceRequest, InvoiceListParams, InvoicePathParams, MarkPaidRequest,
};
use crate::handler::response::{ErrorResponse, InvoiceView};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for invoice operations.
const TRACING_TARGET: &str = "carvoy_server::handler::invoices";

/// Lists invoices; dealers are scoped to their own.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn list_invoices(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Query(params): Query<InvoiceListParams>,
) -> Result<(StatusCode, Json<Vec<InvoiceView>>)> {
    let mut filter = InvoiceFilter {
        dealer_id: params.dealer_id,
        status: params.status,
    };

    if !auth_state.is_admin() {
        filter.dealer_id = Some(auth_state.account_id);
    }

    let mut conn = pg_client.get_connection().await?;

    let invoices = conn
        .list_invoices(filter, params.pagination().into())
        .await?;

    let response = invoices.into_iter().map(InvoiceView::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

fn list_invoices_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List invoices")
        .description("Lists invoices, newest first; dealers see only their own.")
        .response::<200, Json<Vec<InvoiceView>>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Creates a draft invoice with its line items.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn create_invoice(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    auth_state.authorize_admin()?;

    let zero = BigDecimal::from(0);
    if request.items.iter().any(|item| item.amount <= zero) {
        return Err(ErrorKind::BadRequest
            .with_message("Invoice item amounts must be positive")
            .into_static());
    }

    let total_amount = request
        .items
        .iter()
        .fold(BigDecimal::from(0), |acc, item| acc + &item.amount);

    let mut conn = pg_client.get_connection().await?;

    let dealer = conn
        .find_account_by_id(request.dealer_id)
        .await?
        .filter(|account| account.is_dealer())
        .ok_or_else(|| {
            ErrorKind::BadRequest
                .with_message("The selected dealer does not exist")
                .with_resource("dealer")
                .into_static()
        })?;

    let created_by = auth_state.account_id;

    let (invoice, items) = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                let invoice_number = conn.next_invoice_number().await.map_err(Error::from)?;

                let invoice = conn
                    .create_invoice(NewInvoice {
                        dealer_id: request.dealer_id,
                        invoice_number,
                        total_amount,
                        due_at: request.due_at.map(Into::into),
                        created_by,
                    })
                    .await
                    .map_err(Error::from)?;

                let new_items = request
                    .items
                    .into_iter()
                    .map(|item| NewInvoiceItem {
                        invoice_id: invoice.id,
                        vehicle_id: item.vehicle_id,
                        description: item.description,
                        amount: item.amount,
                    })
                    .collect();

                let items = conn
                    .add_invoice_items(new_items)
                    .await
                    .map_err(Error::from)?;

                Ok((invoice, items))
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        dealer_id = %dealer.id,
        total = %invoice.total_amount,
        "invoice created"
    );

    Ok((
        StatusCode::CREATED,
        Json(InvoiceView::from_model(invoice, items)),
    ))
}

fn create_invoice_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create invoice")
        .description("Creates a draft invoice billing a dealer for transportation costs.")
        .response::<201, Json<InvoiceView>>()
        .response::<400, Json<ErrorResponse<'static>>>()
}

/// Returns a single invoice with its items.
#[tracing::instrument(skip_all, fields(invoice_id = %path_params.invoice_id))]
async fn get_invoice(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<InvoicePathParams>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    let mut conn = pg_client.get_connection().await?;

    let invoice = find_invoice(&mut conn, path_params.invoice_id).await?;
    auth_state.authorize_admin_or_owner(invoice.dealer_id)?;

    // Dealers don't see drafts; the invoice effectively doesn't exist yet.
    if invoice.current_status.is_editable() && !auth_state.is_admin() {
        return Err(not_found());
    }

    let items = conn.list_invoice_items(invoice.id).await?;

    Ok((
        StatusCode::OK,
        Json(InvoiceView::from_model(invoice, items)),
    ))
}

fn get_invoice_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get invoice")
        .response::<200, Json<InvoiceView>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Issues a draft invoice to the dealer.
#[tracing::instrument(skip_all, fields(invoice_id = %path_params.invoice_id))]
async fn issue_invoice(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<InvoicePathParams>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_invoice(&mut conn, path_params.invoice_id).await?;

    let invoice_id = path_params.invoice_id;

    let invoice = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                let invoice = conn
                    .issue_invoice(invoice_id)
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(|| {
                        ErrorKind::Conflict
                            .with_message("Only draft invoices can be issued")
                            .into_static()
                    })?;

                conn.create_notification(NewAccountNotification {
                    account_id: invoice.dealer_id,
                    event: NotificationEvent::InvoiceIssued,
                    title: "New invoice".to_string(),
                    message: format!(
                        "Invoice {} for {} has been issued to you",
                        invoice.invoice_number, invoice.total_amount
                    ),
                    related_id: Some(invoice.id),
                })
                .await
                .map_err(Error::from)?;

                Ok(invoice)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        invoice_id = %invoice.id,
        issued_by = %auth_state.account_id,
        "invoice issued"
    );

    Ok((StatusCode::OK, Json(invoice.into())))
}

fn issue_invoice_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Issue invoice")
        .description("Issues a draft invoice to the dealer and notifies them.")
        .response::<200, Json<InvoiceView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Cancels a draft or issued invoice.
#[tracing::instrument(skip_all, fields(invoice_id = %path_params.invoice_id))]
async fn cancel_invoice(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<InvoicePathParams>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_invoice(&mut conn, path_params.invoice_id).await?;

    let invoice = conn
        .cancel_invoice(path_params.invoice_id)
        .await?
        .ok_or_else(|| {
            ErrorKind::Conflict
                .with_message("Settled invoices cannot be cancelled")
                .into_static()
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        invoice_id = %invoice.id,
        cancelled_by = %auth_state.account_id,
        "invoice cancelled"
    );

    Ok((StatusCode::OK, Json(invoice.into())))
}

fn cancel_invoice_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Cancel invoice")
        .response::<200, Json<InvoiceView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Pays an issued invoice from the dealer's balance.
///
/// Single transaction: guarded status flip, guarded balance debit, ledger
/// entry, and notification. Insufficient balance rolls everything back.
#[tracing::instrument(skip_all, fields(invoice_id = %path_params.invoice_id))]
async fn pay_invoice(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<InvoicePathParams>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    auth_state.authorize_dealer()?;

    let mut conn = pg_client.get_connection().await?;

    let invoice = find_invoice(&mut conn, path_params.invoice_id).await?;
    auth_state.authorize_admin_or_owner(invoice.dealer_id)?;

    if !invoice.is_payable() {
        return Err(ErrorKind::Conflict
            .with_message("Only issued invoices can be paid")
            .into_static());
    }

    let payer_id = auth_state.account_id;
    let invoice_id = invoice.id;

    let paid = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                // Flip the status first; the guard makes double payment a
                // no-op that surfaces as a conflict.
                let invoice = conn
                    .mark_invoice_paid(invoice_id, PaymentMethod::Balance)
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(|| {
                        ErrorKind::Conflict
                            .with_message("This invoice has already been settled")
                            .into_static()
                    })?;

                let debit = -invoice.total_amount.clone();
                let account = conn
                    .adjust_balance(invoice.dealer_id, debit.clone())
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(|| {
                        ErrorKind::InsufficientBalance
                            .with_context(format!(
                                "invoice total is {}",
                                invoice.total_amount
                            ))
                            .into_static()
                    })?;

                conn.create_balance_transaction(NewBalanceTransaction {
                    account_id: invoice.dealer_id,
                    kind: TransactionKind::InvoicePayment,
                    amount: debit,
                    balance_after: account.balance.clone(),
                    invoice_id: Some(invoice.id),
                    balance_request_id: None,
                    note: Some(format!("Payment of invoice {}", invoice.invoice_number)),
                    created_by: Some(payer_id),
                })
                .await
                .map_err(Error::from)?;

                conn.create_notification(NewAccountNotification {
                    account_id: invoice.dealer_id,
                    event: NotificationEvent::InvoicePaid,
                    title: "Invoice paid".to_string(),
                    message: format!(
                        "Invoice {} was paid from your balance; remaining balance is {}",
                        invoice.invoice_number, account.balance
                    ),
                    related_id: Some(invoice.id),
                })
                .await
                .map_err(Error::from)?;

                Ok(invoice)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        invoice_id = %paid.id,
        dealer_id = %paid.dealer_id,
        total = %paid.total_amount,
        "invoice paid from balance"
    );

    Ok((StatusCode::OK, Json(paid.into())))
}

fn pay_invoice_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Pay invoice from balance")
        .description(
            "Debits the dealer balance by the invoice total and settles the \
             invoice; rejected when the balance is insufficient.",
        )
        .response::<200, Json<InvoiceView>>()
        .response::<402, Json<ErrorResponse<'static>>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Confirms an external (wire transfer) payment of an issued invoice.
#[tracing::instrument(skip_all, fields(invoice_id = %path_params.invoice_id))]
async fn mark_invoice_paid(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<InvoicePathParams>,
    ValidateJson(request): ValidateJson<MarkPaidRequest>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_invoice(&mut conn, path_params.invoice_id).await?;

    let invoice_id = path_params.invoice_id;
    let note = request.note;

    let invoice = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                let invoice = conn
                    .mark_invoice_paid(invoice_id, PaymentMethod::WireTransfer)
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(|| {
                        ErrorKind::Conflict
                            .with_message("Only issued invoices can be marked as paid")
                            .into_static()
                    })?;

                conn.create_notification(NewAccountNotification {
                    account_id: invoice.dealer_id,
                    event: NotificationEvent::InvoicePaid,
                    title: "Invoice paid".to_string(),
                    message: match note {
                        Some(note) => format!(
                            "Invoice {} was marked as paid: {}",
                            invoice.invoice_number, note
                        ),
                        None => format!(
                            "Invoice {} was marked as paid",
                            invoice.invoice_number
                        ),
                    },
                    related_id: Some(invoice.id),
                })
                .await
                .map_err(Error::from)?;

                Ok(invoice)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        invoice_id = %invoice.id,
        confirmed_by = %auth_state.account_id,
        "external invoice payment confirmed"
    );

    Ok((StatusCode::OK, Json(invoice.into())))
}

fn mark_invoice_paid_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Confirm external payment")
        .description("Marks an issued invoice as settled by wire transfer.")
        .response::<200, Json<InvoiceView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Loads an invoice or reports 404.
async fn find_invoice(
    conn: &mut carvoy_postgres::PgConn,
    invoice_id: uuid::Uuid,
) -> Result<Invoice> {
    let invoice = conn
        .find_invoice_by_id(invoice_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(invoice)
}

fn not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Invoice not found")
        .with_resource("invoice")
        .into_static()
}

/// Returns routes for invoice management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/invoices",
            get_with(list_invoices, list_invoices_docs)
                .post_with(create_invoice, create_invoice_docs),
        )
        .api_route(
            "/invoices/{invoiceId}",
            get_with(get_invoice, get_invoice_docs),
        )
        .api_route(
            "/invoices/{invoiceId}/issue",
            post_with(issue_invoice, issue_invoice_docs),
        )
        .api_route(
            "/invoices/{invoiceId}/cancel",
            post_with(cancel_invoice, cancel_invoice_docs),
        )
        .api_route(
            "/invoices/{invoiceId}/pay",
            post_with(pay_invoice, pay_invoice_docs),
        )
        .api_route(
            "/invoices/{invoiceId}/mark-paid",
            post_with(mark_invoice_paid, mark_invoice_paid_docs),
        )
        .with_path_items(|item| item.tag("Invoices"))
}
