//! Balance request and ledger response types.

use bigdecimal::BigDecimal;
use carvoy_postgres::model::{BalanceRequest, BalanceTransaction};
use carvoy_postgres::types::{BalanceRequestStatus, TransactionKind};
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A balance top-up request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequestView {
    /// Unique request identifier.
    pub id: Uuid,
    /// Requesting dealer account.
    pub dealer_id: Uuid,
    /// Requested amount.
    pub amount: BigDecimal,
    /// Review status.
    pub status: BalanceRequestStatus,
    /// Note from the dealer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_note: Option<String>,
    /// Note from the reviewing admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
    /// Whether a payment receipt was uploaded.
    pub has_receipt: bool,
    /// When the request was settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<Timestamp>,
    /// When the request was created.
    pub created_at: Timestamp,
}

impl From<BalanceRequest> for BalanceRequestView {
    fn from(request: BalanceRequest) -> Self {
        let has_receipt = request.has_receipt();
        Self {
            id: request.id,
            dealer_id: request.dealer_id,
            amount: request.amount,
            status: request.current_status,
            dealer_note: request.dealer_note,
            admin_note: request.admin_note,
            has_receipt,
            processed_at: request.processed_at.map(Into::into),
            created_at: request.created_at.into(),
        }
    }
}

/// One entry of the balance ledger.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTransactionView {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Account whose balance changed.
    pub account_id: Uuid,
    /// Entry classification.
    pub kind: TransactionKind,
    /// Signed amount; credits positive, debits negative.
    pub amount: BigDecimal,
    /// Balance after applying this entry.
    pub balance_after: BigDecimal,
    /// Settled invoice, for invoice payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,
    /// Approved balance request, for top-ups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_request_id: Option<Uuid>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the entry was created.
    pub created_at: Timestamp,
}

impl From<BalanceTransaction> for BalanceTransactionView {
    fn from(tx: BalanceTransaction) -> Self {
        Self {
            id: tx.id,
            account_id: tx.account_id,
            kind: tx.kind,
            amount: tx.amount,
            balance_after: tx.balance_after,
            invoice_id: tx.invoice_id,
            balance_request_id: tx.balance_request_id,
            note: tx.note,
            created_at: tx.created_at.into(),
        }
    }
}
