//! JWT claims for authentication tokens.

use std::borrow::Cow;

use carvoy_postgres::model::Account;
use carvoy_postgres::types::AccountRole;
use jiff::{Span, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handler::{ErrorKind, Result};

/// JWT claims for authentication tokens.
///
/// Contains both RFC 7519 registered claims and Carvoy-specific claims.
/// Timestamps are serialized in RFC 3339 format; expiry is enforced by
/// [`AuthClaims::is_expired`] rather than the JWT library's numeric check.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    // Standard (or registered) claims.
    /// Issuer (who created the token).
    #[serde(rename = "iss")]
    issued_by: Cow<'static, str>,
    /// Audience (who the token is intended for).
    #[serde(rename = "aud")]
    audience: Cow<'static, str>,

    /// JWT ID (unique identifier for token).
    #[serde(rename = "jti")]
    pub token_id: Uuid,
    /// Subject ID (unique identifier for the associated account).
    #[serde(rename = "sub")]
    pub account_id: Uuid,

    /// Issued at (as UTC timestamp).
    #[serde(rename = "iat")]
    pub issued_at: Timestamp,
    /// Expiration time (as UTC timestamp).
    #[serde(rename = "exp")]
    pub expires_at: Timestamp,

    // Private (or custom) claims
    /// Role of the account at issue time.
    pub role: AccountRole,
}

impl AuthClaims {
    /// Default JWT audience identifier for authentication tokens.
    pub(crate) const JWT_AUDIENCE: &'static str = "carvoy:server";
    /// Default JWT issuer identifier for authentication tokens.
    pub(crate) const JWT_ISSUER: &'static str = "carvoy";

    /// Creates new claims for an account with the given time-to-live.
    pub fn new(account: &Account, ttl: Span) -> Self {
        let issued_at = Timestamp::now();

        Self {
            issued_by: Cow::Borrowed(Self::JWT_ISSUER),
            audience: Cow::Borrowed(Self::JWT_AUDIENCE),
            token_id: Uuid::new_v4(),
            account_id: account.id,
            issued_at,
            expires_at: issued_at
                .saturating_add(ttl)
                .expect("token TTL span uses hour units, which never overflow timestamp arithmetic"),
            role: account.account_role,
        }
    }

    /// Checks if the token has expired based on current UTC time.
    #[inline]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Timestamp::now()
    }

    /// Returns whether the claims carry the admin role.
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Requires the admin role.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Forbidden`] for non-admin accounts.
    pub fn authorize_admin(&self) -> Result<()> {
        if self.is_admin() {
            return Ok(());
        }

        tracing::warn!(
            target: crate::TRACING_TARGET_AUTHORIZATION,
            account_id = %self.account_id,
            "admin-only operation rejected"
        );

        Err(ErrorKind::Forbidden
            .with_message("This operation requires administrator privileges")
            .into_static())
    }

    /// Requires the dealer role.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Forbidden`] for non-dealer accounts.
    pub fn authorize_dealer(&self) -> Result<()> {
        if self.role.is_dealer() {
            return Ok(());
        }

        Err(ErrorKind::Forbidden
            .with_message("This operation is only available to dealer accounts")
            .into_static())
    }

    /// Requires either the admin role or ownership of the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Forbidden`] when the caller is neither an admin
    /// nor the owner.
    pub fn authorize_admin_or_owner(&self, owner_id: Uuid) -> Result<()> {
        if self.is_admin() || self.account_id == owner_id {
            return Ok(());
        }

        tracing::warn!(
            target: crate::TRACING_TARGET_AUTHORIZATION,
            account_id = %self.account_id,
            owner_id = %owner_id,
            "ownership check rejected"
        );

        Err(ErrorKind::Forbidden
            .with_message("You don't have access to this resource")
            .into_static())
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::*;

    fn account(role: AccountRole) -> Account {
        let epoch = jiff_account_timestamp();
        Account {
            id: Uuid::new_v4(),
            account_role: role,
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

    fn jiff_account_timestamp() -> jiff_diesel::Timestamp {
        jiff_diesel::Timestamp::from(Timestamp::UNIX_EPOCH)
    }

    #[test]
    fn fresh_claims_are_not_expired() {
        let claims = AuthClaims::new(&account(AccountRole::Dealer), Span::new().hours(12));
        assert!(!claims.is_expired());
    }

    #[test]
    fn zero_ttl_claims_are_expired() {
        let claims = AuthClaims::new(&account(AccountRole::Dealer), Span::new());
        assert!(claims.is_expired());
    }

    #[test]
    fn role_gates() {
        let admin = AuthClaims::new(&account(AccountRole::Admin), Span::new().hours(1));
        assert!(admin.authorize_admin().is_ok());
        assert!(admin.authorize_dealer().is_err());

        let dealer = AuthClaims::new(&account(AccountRole::Dealer), Span::new().hours(1));
        assert!(dealer.authorize_admin().is_err());
        assert!(dealer.authorize_dealer().is_ok());
    }

    #[test]
    fn owner_check_allows_admin_and_owner() {
        let owner = account(AccountRole::Dealer);
        let claims = AuthClaims::new(&owner, Span::new().hours(1));
        assert!(claims.authorize_admin_or_owner(owner.id).is_ok());
        assert!(claims.authorize_admin_or_owner(Uuid::new_v4()).is_err());

        let admin = AuthClaims::new(&account(AccountRole::Admin), Span::new().hours(1));
        assert!(admin.authorize_admin_or_owner(Uuid::new_v4()).is_ok());
    }
}
