//! Dealer account management handlers (admin only).

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::PgClient;
use carvoy_postgres::model::{NewAccount, UpdateAccount};
use carvoy_postgres::query::AccountRepository;
use carvoy_postgres::types::AccountRole;

use crate::extract::{AuthState, Json, Path, Query, ValidateJson};
use crate::handler::request::{
    CreateDealerRequest, DealerListParams, DealerPathParams, UpdateDealerRequest,
};
use crate::handler::response::{Dealer, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{AuthHasher, ServiceState};

/// Tracing target for dealer management.
const TRACING_TARGET: &str = "carvoy_server::handler::dealers";

/// Lists dealer accounts with optional search.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn list_dealers(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Query(params): Query<DealerListParams>,
) -> Result<(StatusCode, Json<Vec<Dealer>>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;

    let dealers = conn
        .list_accounts_by_role(
            AccountRole::Dealer,
            params.search.as_deref(),
            params.pagination().into(),
        )
        .await?;

    let response = dealers.into_iter().map(Dealer::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

fn list_dealers_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List dealers")
        .description("Lists dealer accounts, newest first, with optional search.")
        .response::<200, Json<Vec<Dealer>>>()
        .response::<403, Json<ErrorResponse<'static>>>()
}

/// Creates a new dealer account.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn create_dealer(
    State(pg_client): State<PgClient>,
    State(auth_hasher): State<AuthHasher>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateDealerRequest>,
) -> Result<(StatusCode, Json<Dealer>)> {
    auth_state.authorize_admin()?;

    let password_hash = auth_hasher.hash_password(&request.password)?;
    let mut conn = pg_client.get_connection().await?;

    if conn.email_exists(&request.email_address).await? {
        return Err(ErrorKind::Conflict
            .with_message("An account with this email address already exists")
            .into_static());
    }

    let dealer = conn
        .create_account(NewAccount {
            account_role: AccountRole::Dealer,
            display_name: request.display_name,
            email_address: request.email_address,
            password_hash,
            company_name: request.company_name,
            phone_number: request.phone_number,
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        dealer_id = %dealer.id,
        created_by = %auth_state.account_id,
        "dealer account created"
    );

    Ok((StatusCode::CREATED, Json(dealer.into())))
}

fn create_dealer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create dealer")
        .description("Creates a dealer account with an initial password.")
        .response::<201, Json<Dealer>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Returns a single dealer account.
#[tracing::instrument(skip_all, fields(dealer_id = %path_params.dealer_id))]
async fn get_dealer(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<DealerPathParams>,
) -> Result<(StatusCode, Json<Dealer>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let dealer = find_dealer(&mut conn, path_params.dealer_id).await?;

    Ok((StatusCode::OK, Json(dealer.into())))
}

fn get_dealer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get dealer")
        .response::<200, Json<Dealer>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Updates a dealer's profile.
#[tracing::instrument(skip_all, fields(dealer_id = %path_params.dealer_id))]
async fn update_dealer(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<DealerPathParams>,
    ValidateJson(request): ValidateJson<UpdateDealerRequest>,
) -> Result<(StatusCode, Json<Dealer>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_dealer(&mut conn, path_params.dealer_id).await?;

    let dealer = conn
        .update_account(
            path_params.dealer_id,
            UpdateAccount {
                display_name: request.display_name,
                email_address: request.email_address,
                company_name: request.company_name,
                phone_number: request.phone_number,
                ..Default::default()
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(dealer.into())))
}

fn update_dealer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update dealer")
        .response::<200, Json<Dealer>>()
        .response::<404, Json<ErrorResponse<'static>>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Suspends a dealer account.
#[tracing::instrument(skip_all, fields(dealer_id = %path_params.dealer_id))]
async fn suspend_dealer(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<DealerPathParams>,
) -> Result<(StatusCode, Json<Dealer>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let dealer = find_dealer(&mut conn, path_params.dealer_id).await?;

    if !dealer.can_be_suspended() {
        return Err(ErrorKind::Conflict
            .with_message("This account cannot be suspended")
            .into_static());
    }

    let dealer = conn.suspend_account(path_params.dealer_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        dealer_id = %dealer.id,
        suspended_by = %auth_state.account_id,
        "dealer suspended"
    );

    Ok((StatusCode::OK, Json(dealer.into())))
}

fn suspend_dealer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Suspend dealer")
        .response::<200, Json<Dealer>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Lifts a dealer suspension.
#[tracing::instrument(skip_all, fields(dealer_id = %path_params.dealer_id))]
async fn unsuspend_dealer(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<DealerPathParams>,
) -> Result<(StatusCode, Json<Dealer>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let dealer = find_dealer(&mut conn, path_params.dealer_id).await?;

    if !dealer.can_be_unsuspended() {
        return Err(ErrorKind::Conflict
            .with_message("This account is not suspended")
            .into_static());
    }

    let dealer = conn.unsuspend_account(path_params.dealer_id).await?;

    Ok((StatusCode::OK, Json(dealer.into())))
}

fn unsuspend_dealer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Unsuspend dealer")
        .response::<200, Json<Dealer>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Soft deletes a dealer account.
#[tracing::instrument(skip_all, fields(dealer_id = %path_params.dealer_id))]
async fn delete_dealer(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<DealerPathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_dealer(&mut conn, path_params.dealer_id).await?;

    conn.delete_account(path_params.dealer_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        dealer_id = %path_params.dealer_id,
        deleted_by = %auth_state.account_id,
        "dealer deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn delete_dealer_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete dealer")
        .description("Soft deletes a dealer account, preserving history.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Loads a dealer account or reports 404.
async fn find_dealer(
    conn: &mut carvoy_postgres::PgConn,
    dealer_id: uuid::Uuid,
) -> Result<carvoy_postgres::model::Account> {
    let account = conn
        .find_account_by_id(dealer_id)
        .await?
        .filter(|account| account.is_dealer())
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Dealer not found")
                .with_resource("dealer")
                .into_static()
        })?;

    Ok(account)
}

/// Returns routes for dealer management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/dealers",
            get_with(list_dealers, list_dealers_docs).post_with(create_dealer, create_dealer_docs),
        )
        .api_route(
            "/dealers/{dealerId}",
            get_with(get_dealer, get_dealer_docs)
                .patch_with(update_dealer, update_dealer_docs)
                .delete_with(delete_dealer, delete_dealer_docs),
        )
        .api_route(
            "/dealers/{dealerId}/suspend",
            post_with(suspend_dealer, suspend_dealer_docs),
        )
        .api_route(
            "/dealers/{dealerId}/unsuspend",
            post_with(unsuspend_dealer, unsuspend_dealer_docs),
        )
        .with_path_items(|item| item.tag("Dealers"))
}
