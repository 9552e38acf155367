//! Authentication handlers: login, session introspection, password change.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::PgClient;
use carvoy_postgres::query::AccountRepository;

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::extract::{AuthClaims, AuthState, Json, ValidateJson};
use crate::handler::request::{ChangePasswordRequest, LoginRequest};
use crate::handler::response::{AccountProfile, ErrorResponse, LoginResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{AuthHasher, AuthKeys, ServiceState};

/// Signs a dealer or admin in with email and password.
#[tracing::instrument(skip_all, fields(email = %request.email_address))]
async fn login(
    State(pg_client): State<PgClient>,
    State(auth_hasher): State<AuthHasher>,
    State(auth_keys): State<AuthKeys>,
    ValidateJson(request): ValidateJson<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>)> {
    let mut conn = pg_client.get_connection().await?;

    // A missing account and a wrong password produce the same response so
    // login probing cannot distinguish them.
    let account = conn
        .find_account_by_email(&request.email_address)
        .await?
        .ok_or_else(|| {
            tracing::debug!(
                target: TRACING_TARGET_AUTHENTICATION,
                "login rejected: unknown email"
            );
            ErrorKind::Unauthorized
                .with_message("Invalid email or password")
                .into_static()
        })?;

    auth_hasher.verify_password(&request.password, &account.password_hash)?;

    if !account.can_login() {
        tracing::warn!(
            target: TRACING_TARGET_AUTHENTICATION,
            account_id = %account.id,
            "login rejected: account not active"
        );
        return Err(ErrorKind::Unauthorized
            .with_message("Your account is suspended")
            .into_static());
    }

    let claims = AuthClaims::new(&account, auth_keys.token_ttl());
    let access_token = auth_keys.encode_claims(&claims)?;

    tracing::info!(
        target: TRACING_TARGET_AUTHENTICATION,
        account_id = %account.id,
        role = %account.account_role,
        "login succeeded"
    );

    let response = LoginResponse {
        access_token,
        expires_at: claims.expires_at,
        account: account.into(),
    };

    Ok((StatusCode::OK, Json(response)))
}

fn login_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Log in")
        .description("Signs a dealer or admin in and returns a Bearer token.")
        .response::<200, Json<LoginResponse>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Returns the authenticated account's profile.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn get_session(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
) -> Result<(StatusCode, Json<AccountProfile>)> {
    let mut conn = pg_client.get_connection().await?;

    let account = conn
        .find_account_by_id(auth_state.account_id)
        .await?
        .ok_or_else(|| ErrorKind::Unauthorized.into_error())?;

    Ok((StatusCode::OK, Json(account.into())))
}

fn get_session_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Current session")
        .description("Returns the authenticated account's profile and balance.")
        .response::<200, Json<AccountProfile>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Changes the authenticated account's password.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn change_password(
    State(pg_client): State<PgClient>,
    State(auth_hasher): State<AuthHasher>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<ChangePasswordRequest>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    let account = conn
        .find_account_by_id(auth_state.account_id)
        .await?
        .ok_or_else(|| ErrorKind::Unauthorized.into_error())?;

    auth_hasher
        .verify_password(&request.current_password, &account.password_hash)
        .map_err(|_| {
            ErrorKind::Unauthorized
                .with_message("The current password is incorrect")
                .into_static()
        })?;

    let password_hash = auth_hasher.hash_password(&request.new_password)?;
    conn.update_password(account.id, password_hash).await?;

    tracing::info!(
        target: TRACING_TARGET_AUTHENTICATION,
        account_id = %account.id,
        "password changed"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn change_password_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Change password")
        .description("Verifies the current password and sets a new one.")
        .response::<204, ()>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Returns routes that don't require a session.
pub fn public_routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/auth/login", post_with(login, login_docs))
        .with_path_items(|item| item.tag("Authentication"))
}

/// Returns authenticated session routes.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/auth/session", get_with(get_session, get_session_docs))
        .api_route(
            "/auth/password",
            post_with(change_password, change_password_docs),
        )
        .with_path_items(|item| item.tag("Authentication"))
}
