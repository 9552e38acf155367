//! Balance request and ledger filters.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::BalanceRequestStatus;

/// Filter criteria for balance request listings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BalanceRequestFilter {
    /// Restrict to a single dealer.
    pub dealer_id: Option<Uuid>,
    /// Restrict to a review status.
    pub status: Option<BalanceRequestStatus>,
}

impl BalanceRequestFilter {
    /// Returns a filter scoped to a dealer.
    pub fn for_dealer(dealer_id: Uuid) -> Self {
        Self {
            dealer_id: Some(dealer_id),
            ..Self::default()
        }
    }

    /// Returns a filter for pending requests only.
    pub fn pending() -> Self {
        Self {
            status: Some(BalanceRequestStatus::Pending),
            ..Self::default()
        }
    }
}

/// Filter criteria for balance ledger listings and exports.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TransactionFilter {
    /// Restrict to a single account.
    pub account_id: Option<Uuid>,
    /// Inclusive lower bound on the entry timestamp.
    pub from: Option<Timestamp>,
    /// Exclusive upper bound on the entry timestamp.
    pub until: Option<Timestamp>,
}

impl TransactionFilter {
    /// Returns a filter scoped to an account.
    pub fn for_account(account_id: Uuid) -> Self {
        Self {
            account_id: Some(account_id),
            ..Self::default()
        }
    }
}
