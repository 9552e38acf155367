//! Invoice line item model.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::invoice_items;

/// A single line on an invoice, usually one vehicle's transportation cost.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = invoice_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Owning invoice (items are removed with it).
    pub invoice_id: Uuid,
    /// Billed vehicle, if the line refers to one.
    pub vehicle_id: Option<Uuid>,
    /// Line description.
    pub description: String,
    /// Line amount; always positive.
    pub amount: BigDecimal,
    /// Timestamp when the item was created.
    pub created_at: Timestamp,
}

/// Data for creating a new invoice item.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = invoice_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewInvoiceItem {
    /// Owning invoice.
    pub invoice_id: Uuid,
    /// Billed vehicle, if the line refers to one.
    pub vehicle_id: Option<Uuid>,
    /// Line description.
    pub description: String,
    /// Line amount.
    pub amount: BigDecimal,
}
