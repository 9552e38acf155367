//! Authentication state extractor with database verification.
//!
//! [`AuthState`] validates the Bearer token cryptographically and then
//! re-reads the account so suspended or deleted accounts, and tokens whose
//! role claim no longer matches the database, are rejected immediately.

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use carvoy_postgres::PgClient;
use carvoy_postgres::query::AccountRepository;
use derive_more::Deref;

use super::AuthClaims;
use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::AuthKeys;

/// Authenticated account state with database verification.
///
/// When extraction succeeds the caller is guaranteed to hold:
///
/// - A cryptographically valid, unexpired token
/// - An existing, active (not suspended, not deleted) account
/// - A role claim matching the current database state
///
/// The verified state is cached in the request extensions so multiple
/// extractions within one request hit the database only once.
#[derive(Debug, Clone, Deref, PartialEq, Eq)]
pub struct AuthState(pub AuthClaims);

impl AuthState {
    /// Creates a new [`AuthState`] from pre-verified claims.
    ///
    /// Only use this when the claims already went through
    /// [`Self::from_bearer_token`]; constructing it from unverified claims
    /// bypasses the account checks.
    #[inline]
    #[must_use]
    pub const fn from_verified_claims(auth_claims: AuthClaims) -> Self {
        Self(auth_claims)
    }

    /// Verifies a raw Bearer token against the signing keys and the database.
    pub async fn from_bearer_token(
        token: &str,
        auth_keys: &AuthKeys,
        pg_client: &PgClient,
    ) -> Result<Self> {
        let auth_claims = auth_keys.decode_claims(token)?;

        if auth_claims.is_expired() {
            tracing::debug!(
                target: TRACING_TARGET_AUTHENTICATION,
                account_id = %auth_claims.account_id,
                token_id = %auth_claims.token_id,
                "authentication failed: token expired"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Your session has expired")
                .with_context("Please sign in again to continue")
                .into_static());
        }

        let mut conn = pg_client.get_connection().await.map_err(|db_error| {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %db_error,
                account_id = %auth_claims.account_id,
                "database connection failed during authentication verification"
            );
            ErrorKind::InternalServerError
                .with_message("Authentication verification is temporarily unavailable")
                .into_static()
        })?;

        let account = conn
            .find_account_by_id(auth_claims.account_id)
            .await
            .map_err(|db_error| {
                tracing::error!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    error = %db_error,
                    account_id = %auth_claims.account_id,
                    "database error during account verification"
                );
                ErrorKind::InternalServerError
                    .with_message("Account verification encountered an error")
                    .into_static()
            })?
            .ok_or_else(|| {
                tracing::warn!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    account_id = %auth_claims.account_id,
                    "authentication failed: account referenced in token no longer exists"
                );
                ErrorKind::Unauthorized
                    .with_message("Account not found")
                    .with_context("Your account may have been deactivated")
                    .into_static()
            })?;

        if !account.is_active() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                account_id = %auth_claims.account_id,
                is_suspended = account.is_suspended,
                "authentication failed: account is not active"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Your account is suspended")
                .with_context("Contact support if you believe this is a mistake")
                .into_static());
        }

        // Role changes invalidate outstanding tokens.
        if account.account_role != auth_claims.role {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                account_id = %auth_claims.account_id,
                token_role = %auth_claims.role,
                current_role = %account.account_role,
                "authentication failed: role claim does not match database"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Your account privileges have changed")
                .with_context("Please sign in again")
                .into_static());
        }

        tracing::debug!(
            target: TRACING_TARGET_AUTHENTICATION,
            account_id = %auth_claims.account_id,
            role = %auth_claims.role,
            "authentication verification completed"
        );

        Ok(Self::from_verified_claims(auth_claims))
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    AuthKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Check for cached auth state to avoid repeated database queries
        if let Some(auth_state) = parts.extensions.get::<Self>() {
            return Ok(auth_state.clone());
        }

        let TypedHeader(Authorization(bearer)) =
            <TypedHeader<Authorization<Bearer>> as FromRequestParts<S>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ErrorKind::MissingAuthToken
                        .with_context("Provide an 'Authorization: Bearer <token>' header")
                        .into_static()
                })?;

        let auth_keys = AuthKeys::from_ref(state);
        let pg_client = PgClient::from_ref(state);
        let auth_state = Self::from_bearer_token(bearer.token(), &auth_keys, &pg_client).await?;

        // Cache the verified state for subsequent extractors in the same request
        parts.extensions.insert(auth_state.clone());
        Ok(auth_state)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    AuthKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <Self as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(auth_state) => Ok(Some(auth_state)),
            Err(_) => Ok(None),
        }
    }
}

impl aide::OperationInput for AuthState {}
