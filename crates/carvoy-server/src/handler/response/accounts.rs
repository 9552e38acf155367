//! Account and dealer response types.

use bigdecimal::BigDecimal;
use carvoy_postgres::model::Account;
use carvoy_postgres::types::AccountRole;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated account's own profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    /// Unique account identifier.
    pub id: Uuid,
    /// Account role.
    pub role: AccountRole,
    /// Display name.
    pub display_name: String,
    /// Email address.
    pub email_address: String,
    /// Company name, for dealer accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Current balance.
    pub balance: BigDecimal,
    /// When the account was created.
    pub created_at: Timestamp,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            role: account.account_role,
            display_name: account.display_name,
            email_address: account.email_address,
            company_name: account.company_name,
            phone_number: account.phone_number,
            balance: account.balance,
            created_at: account.created_at.into(),
        }
    }
}

/// A dealer account as seen by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Email address.
    pub email_address: String,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Current balance.
    pub balance: BigDecimal,
    /// Whether the account is suspended.
    pub is_suspended: bool,
    /// When the account was created.
    pub created_at: Timestamp,
}

impl From<Account> for Dealer {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            display_name: account.display_name,
            email_address: account.email_address,
            company_name: account.company_name,
            phone_number: account.phone_number,
            balance: account.balance,
            is_suspended: account.is_suspended,
            created_at: account.created_at.into(),
        }
    }
}
