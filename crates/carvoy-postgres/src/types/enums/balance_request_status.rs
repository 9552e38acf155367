//! Balance request status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the review state of a dealer's balance top-up request.
///
/// Corresponds to the `balance_request_status` PostgreSQL enum. A request is
/// settled (approved or rejected) by an admin exactly once.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::BalanceRequestStatus"]
pub enum BalanceRequestStatus {
    /// Submitted by the dealer, awaiting review
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[default]
    Pending,

    /// Approved; the amount has been credited to the dealer balance
    #[db_rename = "approved"]
    #[serde(rename = "approved")]
    Approved,

    /// Rejected by an admin
    #[db_rename = "rejected"]
    #[serde(rename = "rejected")]
    Rejected,
}

impl BalanceRequestStatus {
    /// Returns whether this request can still be settled.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, BalanceRequestStatus::Pending)
    }

    /// Returns whether this request has been settled.
    #[inline]
    pub fn is_settled(self) -> bool {
        !self.is_pending()
    }
}
