//! Invoice response types.

use bigdecimal::BigDecimal;
use carvoy_postgres::model::{Invoice, InvoiceItem};
use carvoy_postgres::types::{InvoiceStatus, PaymentMethod};
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemView {
    /// Unique item identifier.
    pub id: Uuid,
    /// Billed vehicle, if the line refers to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Uuid>,
    /// Line description.
    pub description: String,
    /// Line amount.
    pub amount: BigDecimal,
}

impl From<InvoiceItem> for InvoiceItemView {
    fn from(item: InvoiceItem) -> Self {
        Self {
            id: item.id,
            vehicle_id: item.vehicle_id,
            description: item.description,
            amount: item.amount,
        }
    }
}

/// An invoice with its line items.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    /// Unique invoice identifier.
    pub id: Uuid,
    /// Billed dealer account.
    pub dealer_id: Uuid,
    /// Human-readable invoice number.
    pub invoice_number: String,
    /// Settlement status.
    pub status: InvoiceStatus,
    /// Sum of all item amounts.
    pub total_amount: BigDecimal,
    /// How the invoice was settled, once paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_with: Option<PaymentMethod>,
    /// When the invoice was issued to the dealer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Timestamp>,
    /// Payment deadline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Timestamp>,
    /// When the invoice was settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<Timestamp>,
    /// Line items; empty in list responses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<InvoiceItemView>,
    /// When the invoice was created.
    pub created_at: Timestamp,
}

impl InvoiceView {
    /// Builds the response from an invoice and its items.
    pub fn from_model(invoice: Invoice, items: Vec<InvoiceItem>) -> Self {
        Self {
            id: invoice.id,
            dealer_id: invoice.dealer_id,
            invoice_number: invoice.invoice_number,
            status: invoice.current_status,
            total_amount: invoice.total_amount,
            paid_with: invoice.paid_with,
            issued_at: invoice.issued_at.map(Into::into),
            due_at: invoice.due_at.map(Into::into),
            paid_at: invoice.paid_at.map(Into::into),
            items: items.into_iter().map(Into::into).collect(),
            created_at: invoice.created_at.into(),
        }
    }
}

impl From<Invoice> for InvoiceView {
    #[inline]
    fn from(invoice: Invoice) -> Self {
        Self::from_model(invoice, Vec::new())
    }
}
