//! Invoice request types.

use bigdecimal::BigDecimal;
use carvoy_postgres::types::InvoiceStatus;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One line of a new invoice.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemInput {
    /// Billed vehicle, if the line refers to one.
    pub vehicle_id: Option<Uuid>,
    /// Line description.
    #[validate(length(min = 1, max = 300))]
    pub description: String,
    /// Line amount; must be positive.
    pub amount: BigDecimal,
}

/// Request payload for creating an invoice.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Billed dealer account.
    pub dealer_id: Uuid,
    /// Payment deadline.
    pub due_at: Option<Timestamp>,
    /// Line items; at least one.
    #[validate(length(min = 1, max = 100))]
    #[validate(nested)]
    pub items: Vec<InvoiceItemInput>,
}

/// Request payload for confirming an external payment.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaidRequest {
    /// Optional note recorded in the ledger.
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

/// Query parameters for invoice listings.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListParams {
    /// Restrict to a single dealer (admins only).
    pub dealer_id: Option<Uuid>,
    /// Restrict to a settlement status.
    pub status: Option<InvoiceStatus>,
    /// Records to skip.
    pub offset: Option<u32>,
    /// Maximum records to return.
    pub limit: Option<u32>,
}

impl InvoiceListParams {
    /// Extracts the pagination portion of the parameters.
    pub fn pagination(&self) -> super::PaginationParams {
        super::PaginationParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}
