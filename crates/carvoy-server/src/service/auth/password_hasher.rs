//! Secure password hashing and verification using Argon2id.
//!
//! The hashing and verification methods are designed for use in HTTP
//! handlers and return handler-compatible errors: `hash_password` maps system
//! failures to an internal server error, `verify_password` maps mismatches to
//! an unauthorized error.

use argon2::password_hash::Error as ArgonError;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier, Version,
};

use crate::handler::{ErrorKind, Result};
use crate::service::{Result as ServiceResult, ServiceError};

/// Target identifier for password hashing service logging.
const TRACING_TARGET: &str = "carvoy_server::service::auth::hasher";

/// Secure password hashing and verification service using Argon2id.
///
/// Uses OWASP recommended parameters (19 MB memory, 2 iterations, 1 thread)
/// with a cryptographically secure random salt per hash and timing-safe
/// verification.
#[derive(Debug, Clone)]
pub struct AuthHasher {
    argon2: Argon2<'static>,
}

impl AuthHasher {
    /// Creates a new password hashing service with recommended configuration.
    ///
    /// # Errors
    ///
    /// Returns a service error if Argon2 initialization fails.
    pub fn new() -> ServiceResult<Self> {
        let params = Params::new(
            19456, // 19 MB - OWASP recommended
            2,     // 2 iterations - OWASP recommended
            1,     // 1 thread - OWASP recommended
            None,  // Use default output length (32 bytes)
        )
        .map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "Failed to create Argon2 parameters"
            );

            ServiceError::config("Invalid password hashing configuration")
        })?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        Ok(Self { argon2 })
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// The returned hash string includes all parameters and the salt, making
    /// it suitable for long-term storage.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let hash = self
            .argon2
            .hash_password(password.as_bytes())
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "Password hashing failed"
                );
                ErrorKind::InternalServerError.into_error()
            })?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Unauthorized`] on mismatch and
    /// [`ErrorKind::InternalServerError`] when the stored hash is malformed.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<()> {
        let parsed_hash = PasswordHash::new(stored_hash).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "Stored password hash is malformed"
            );
            ErrorKind::InternalServerError.into_error()
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(()),
            Err(ArgonError::PasswordInvalid) => Err(ErrorKind::Unauthorized
                .with_message("Invalid email or password")
                .into_static()),
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "Password verification failed unexpectedly"
                );
                Err(ErrorKind::InternalServerError.into_error())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hasher = AuthHasher::new().unwrap();
        let hash = hasher.hash_password("correct horse battery staple").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher
            .verify_password("correct horse battery staple", &hash)
            .is_ok());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hasher = AuthHasher::new().unwrap();
        let hash = hasher.hash_password("first password").unwrap();

        let err = hasher.verify_password("second password", &hash).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn malformed_hash_is_a_server_error() {
        let hasher = AuthHasher::new().unwrap();
        let err = hasher.verify_password("whatever", "not-a-hash").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
    }
}
