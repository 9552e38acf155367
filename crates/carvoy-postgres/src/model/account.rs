//! Account model for PostgreSQL database operations.
//!
//! Accounts cover both roles of the platform: administrators who run it and
//! dealers who own vehicles and an account balance.
//!
//! ## Models
//!
//! - [`Account`] - Main account model with role, profile, and balance
//! - [`NewAccount`] - Data structure for creating new accounts
//! - [`UpdateAccount`] - Data structure for updating existing accounts

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::accounts;
use crate::types::AccountRole;

/// Main account model representing an admin or dealer account.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Role deciding what the account may do.
    pub account_role: AccountRole,
    /// Temporarily disables account access while preserving data.
    pub is_suspended: bool,
    /// Human-readable name for UI and communications.
    pub display_name: String,
    /// Primary email for authentication (stored lower-cased, unique).
    pub email_address: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Optional company affiliation for dealer accounts.
    pub company_name: Option<String>,
    /// Optional contact phone number.
    pub phone_number: Option<String>,
    /// Current account balance; never negative (check constraint).
    pub balance: BigDecimal,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the account was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new account.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccount {
    /// Role of the new account.
    pub account_role: AccountRole,
    /// Human-readable name for UI and communications.
    pub display_name: String,
    /// Primary email for authentication.
    pub email_address: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Optional company affiliation.
    pub company_name: Option<String>,
    /// Optional contact phone number.
    pub phone_number: Option<String>,
}

/// Data for updating an account.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateAccount {
    /// Human-readable name for UI and communications.
    pub display_name: Option<String>,
    /// Primary email for authentication.
    pub email_address: Option<String>,
    /// Argon2id password hash.
    pub password_hash: Option<String>,
    /// Company affiliation.
    pub company_name: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Suspension status.
    pub is_suspended: Option<bool>,
}

impl Account {
    /// Returns whether the account is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether the account is active and can be used.
    pub fn is_active(&self) -> bool {
        !self.is_suspended && !self.is_deleted()
    }

    /// Returns whether the account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.account_role.is_admin()
    }

    /// Returns whether the account is a dealer.
    pub fn is_dealer(&self) -> bool {
        self.account_role.is_dealer()
    }

    /// Returns whether the account can log in.
    pub fn can_login(&self) -> bool {
        self.is_active()
    }

    /// Returns whether the balance covers the given amount.
    pub fn can_afford(&self, amount: &BigDecimal) -> bool {
        self.balance >= *amount
    }

    /// Returns whether the account is eligible for suspension.
    ///
    /// Admin accounts have protection against suspension to prevent system
    /// lockout scenarios.
    pub fn can_be_suspended(&self) -> bool {
        self.is_active() && !self.is_admin()
    }

    /// Returns whether the account is eligible for reactivation from suspension.
    pub fn can_be_unsuspended(&self) -> bool {
        self.is_suspended && !self.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer(balance: i64) -> Account {
        Account {
            id: Uuid::new_v4(),
            account_role: AccountRole::Dealer,
            is_suspended: false,
            display_name: "Test Dealer".to_string(),
            email_address: "dealer@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            company_name: None,
            phone_number: None,
            balance: BigDecimal::from(balance),
            created_at: Timestamp::from(jiff::Timestamp::UNIX_EPOCH),
            updated_at: Timestamp::from(jiff::Timestamp::UNIX_EPOCH),
            deleted_at: None,
        }
    }

    #[test]
    fn affordability_checks_balance() {
        let account = dealer(500);
        assert!(account.can_afford(&BigDecimal::from(500)));
        assert!(account.can_afford(&BigDecimal::from(499)));
        assert!(!account.can_afford(&BigDecimal::from(501)));
    }

    #[test]
    fn suspended_account_is_not_active() {
        let mut account = dealer(0);
        account.is_suspended = true;
        assert!(!account.is_active());
        assert!(!account.can_login());
        assert!(account.can_be_unsuspended());
    }

    #[test]
    fn admin_cannot_be_suspended() {
        let mut account = dealer(0);
        account.account_role = AccountRole::Admin;
        assert!(!account.can_be_suspended());
    }
}
