//! Balance request and ledger request types.

use bigdecimal::BigDecimal;
use carvoy_postgres::types::BalanceRequestStatus;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Query parameters for balance request listings.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequestListParams {
    /// Restrict to a single dealer (admins only).
    pub dealer_id: Option<Uuid>,
    /// Restrict to a review status.
    pub status: Option<BalanceRequestStatus>,
    /// Records to skip.
    pub offset: Option<u32>,
    /// Maximum records to return.
    pub limit: Option<u32>,
}

impl BalanceRequestListParams {
    /// Extracts the pagination portion of the parameters.
    pub fn pagination(&self) -> super::PaginationParams {
        super::PaginationParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

/// Request payload for submitting a balance top-up request.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBalanceRequestRequest {
    /// Requested amount; must be positive.
    pub amount: BigDecimal,
    /// Optional note to the reviewing admin.
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

/// Request payload for settling (approving or rejecting) a balance request.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SettleBalanceRequestRequest {
    /// Optional note from the reviewing admin.
    #[validate(length(max = 500))]
    pub admin_note: Option<String>,
}

/// Query parameters for ledger listings.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParams {
    /// Restrict to a single account (admins only).
    pub account_id: Option<Uuid>,
    /// Inclusive lower bound on the entry timestamp.
    pub from: Option<Timestamp>,
    /// Exclusive upper bound on the entry timestamp.
    pub until: Option<Timestamp>,
    /// Records to skip.
    pub offset: Option<u32>,
    /// Maximum records to return.
    pub limit: Option<u32>,
}

impl TransactionParams {
    /// Extracts the pagination portion of the parameters.
    pub fn pagination(&self) -> super::PaginationParams {
        super::PaginationParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}
