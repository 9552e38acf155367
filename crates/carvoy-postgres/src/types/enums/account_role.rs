//! Account role enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role of an account.
///
/// Corresponds to the `account_role` PostgreSQL enum. Admins manage dealers,
/// vehicles, invoices, balance requests, and reference data; dealers own
/// vehicles and an account balance.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::AccountRole"]
pub enum AccountRole {
    /// Platform administrator
    #[db_rename = "admin"]
    #[serde(rename = "admin")]
    Admin,

    /// Dealer customer account
    #[db_rename = "dealer"]
    #[serde(rename = "dealer")]
    #[default]
    Dealer,
}

impl AccountRole {
    /// Returns whether this role carries administrative privileges.
    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    /// Returns whether this role is a dealer.
    #[inline]
    pub fn is_dealer(self) -> bool {
        matches!(self, AccountRole::Dealer)
    }
}
