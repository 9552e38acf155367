//! Database error to HTTP error conversion.
//!
//! Converts [`PgError`] values into HTTP responses, turning known constraint
//! violations into precise 400/409 answers and everything else into a
//! generic 500.

use carvoy_postgres::PgError;
use carvoy_postgres::types::{AccountConstraint, ConstraintViolation};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversion.
const TRACING_TARGET: &str = "carvoy_server::postgres_errors";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        // The balance check constraint means "insufficient funds", which has
        // its own status code; every other violation splits 409/400.
        if constraint == ConstraintViolation::Account(AccountConstraint::BalanceNegative) {
            return ErrorKind::InsufficientBalance
                .with_message(constraint.user_message())
                .into_static();
        }

        let kind = if constraint.is_uniqueness() {
            ErrorKind::Conflict
        } else {
            ErrorKind::BadRequest
        };

        kind.with_message(constraint.user_message()).into_static()
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // Try to extract constraint violation
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                // Generic query error without constraint
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

// Used only for transactions.
impl From<carvoy_postgres::DieselError> for Error<'static> {
    fn from(error: carvoy_postgres::DieselError) -> Self {
        // Convert DieselError -> PgError -> Error
        let pg_error: PgError = error.into();
        pg_error.into()
    }
}
