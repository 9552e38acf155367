//! JWT signing and verification keys.

use std::sync::Arc;

use jiff::Span;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::extract::AuthClaims;
use crate::handler::{ErrorKind, Result};
use crate::service::{Result as ServiceResult, ServiceError};

/// Minimum accepted secret length in bytes.
const MIN_SECRET_LENGTH: usize = 32;

/// JWT signing/verification key pair (HS256) plus token policy.
///
/// Expiry lives in the claims as an RFC 3339 timestamp and is checked by
/// [`AuthClaims::is_expired`]; the JWT library only verifies the signature,
/// issuer, and audience.
#[derive(Clone)]
pub struct AuthKeys {
    inner: Arc<AuthKeysInner>,
}

struct AuthKeysInner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    token_ttl: Span,
}

impl AuthKeys {
    /// Creates keys from a shared secret.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the secret is shorter than 32 bytes.
    pub fn new(secret: &str, token_ttl: Span) -> ServiceResult<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(ServiceError::config(format!(
                "JWT secret must be at least {} bytes",
                MIN_SECRET_LENGTH
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is an RFC 3339 string claim, enforced by AuthClaims.
        validation.validate_exp = false;
        validation.validate_aud = true;
        validation.set_audience(&[AuthClaims::JWT_AUDIENCE]);
        validation.set_issuer(&[AuthClaims::JWT_ISSUER]);
        validation.set_required_spec_claims(&["iss", "aud", "jti", "sub"]);

        Ok(Self {
            inner: Arc::new(AuthKeysInner {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                validation,
                token_ttl,
            }),
        })
    }

    /// Returns the configured token time-to-live.
    pub fn token_ttl(&self) -> Span {
        self.inner.token_ttl
    }

    /// Signs the claims into a compact JWT.
    pub fn encode_claims(&self, claims: &AuthClaims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.inner.encoding).map_err(|e| {
            tracing::error!(
                target: crate::TRACING_TARGET_AUTHENTICATION,
                error = %e,
                "failed to sign authentication token"
            );
            ErrorKind::InternalServerError.into_error()
        })
    }

    /// Verifies a compact JWT and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedAuthToken`] for structurally invalid
    /// tokens and [`ErrorKind::Unauthorized`] for bad signatures or claims.
    pub fn decode_claims(&self, token: &str) -> Result<AuthClaims> {
        decode::<AuthClaims>(token, &self.inner.decoding, &self.inner.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind as JwtErrorKind;

                tracing::debug!(
                    target: crate::TRACING_TARGET_AUTHENTICATION,
                    error = %e,
                    "token verification failed"
                );

                match e.kind() {
                    JwtErrorKind::InvalidToken | JwtErrorKind::Base64(_) | JwtErrorKind::Json(_) => {
                        ErrorKind::MalformedAuthToken.into_error()
                    }
                    _ => ErrorKind::Unauthorized
                        .with_message("Invalid authentication token")
                        .into_static(),
                }
            })
    }
}

impl std::fmt::Debug for AuthKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthKeys").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use carvoy_postgres::model::Account;
    use carvoy_postgres::types::AccountRole;
    use uuid::Uuid;

    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn account() -> Account {
        let epoch = jiff_diesel::Timestamp::from(jiff::Timestamp::UNIX_EPOCH);
        Account {
            id: Uuid::new_v4(),
            account_role: AccountRole::Dealer,
            is_suspended: false,
            display_name: "Test".to_string(),
            email_address: "test@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            company_name: None,
            phone_number: None,
            balance: BigDecimal::from(0),
            created_at: epoch,
            updated_at: epoch,
            deleted_at: None,
        }
    }

    #[test]
    fn short_secrets_are_rejected() {
        assert!(AuthKeys::new("too-short", Span::new().hours(1)).is_err());
    }

    #[test]
    fn encode_decode_roundtrip() {
        let keys = AuthKeys::new(SECRET, Span::new().hours(12)).unwrap();
        let account = account();
        let claims = AuthClaims::new(&account, keys.token_ttl());

        let token = keys.encode_claims(&claims).unwrap();
        let decoded = keys.decode_claims(&token).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.account_id, account.id);
        assert!(!decoded.is_expired());
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let keys = AuthKeys::new(SECRET, Span::new().hours(1)).unwrap();
        let claims = AuthClaims::new(&account(), keys.token_ttl());
        let token = keys.encode_claims(&claims).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(keys.decode_claims(&tampered).is_err());

        let other_keys =
            AuthKeys::new("ffffffffffffffffffffffffffffffff", Span::new().hours(1)).unwrap();
        assert!(other_keys.decode_claims(&token).is_err());
    }

    #[test]
    fn garbage_is_malformed() {
        let keys = AuthKeys::new(SECRET, Span::new().hours(1)).unwrap();
        let err = keys.decode_claims("not-a-jwt").unwrap_err();
        assert_eq!(err.kind(), crate::handler::ErrorKind::MalformedAuthToken);
    }
}
