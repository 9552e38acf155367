//! Invoice model for PostgreSQL database operations.
//!
//! An invoice bills a dealer for one or more vehicles' transportation cost.
//! It is settled either from the dealer balance or by an external wire
//! transfer confirmed by an admin; either way `mark_paid` flips the status
//! exactly once.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::invoices;
use crate::types::{InvoiceStatus, PaymentMethod};

/// Main invoice model.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: Uuid,
    /// Billed dealer account.
    pub dealer_id: Uuid,
    /// Human-readable unique invoice number (e.g. `INV-2026-00042`).
    pub invoice_number: String,
    /// Settlement status.
    pub current_status: InvoiceStatus,
    /// Sum of all item amounts.
    pub total_amount: BigDecimal,
    /// How the invoice was settled, once paid.
    pub paid_with: Option<PaymentMethod>,
    /// Timestamp when the invoice was issued to the dealer.
    pub issued_at: Option<Timestamp>,
    /// Payment deadline.
    pub due_at: Option<Timestamp>,
    /// Timestamp when the invoice was settled.
    pub paid_at: Option<Timestamp>,
    /// Admin who created the invoice.
    pub created_by: Uuid,
    /// Timestamp when the invoice was created.
    pub created_at: Timestamp,
    /// Timestamp when the invoice was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new invoice.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewInvoice {
    /// Billed dealer account.
    pub dealer_id: Uuid,
    /// Human-readable unique invoice number.
    pub invoice_number: String,
    /// Sum of all item amounts.
    pub total_amount: BigDecimal,
    /// Payment deadline.
    pub due_at: Option<Timestamp>,
    /// Admin who created the invoice.
    pub created_by: Uuid,
}

/// Data for updating a draft invoice.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateInvoice {
    /// Sum of all item amounts.
    pub total_amount: Option<BigDecimal>,
    /// Payment deadline.
    pub due_at: Option<Option<Timestamp>>,
}

impl Invoice {
    /// Returns whether the invoice belongs to the given dealer.
    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.dealer_id == account_id
    }

    /// Returns whether the invoice can still be edited.
    pub fn is_editable(&self) -> bool {
        self.current_status.is_editable()
    }

    /// Returns whether the invoice is awaiting payment.
    pub fn is_payable(&self) -> bool {
        self.current_status.is_payable()
    }

    /// Returns whether the invoice is overdue.
    pub fn is_overdue(&self) -> bool {
        if !self.is_payable() {
            return false;
        }
        self.due_at
            .is_some_and(|due| jiff::Timestamp::from(due) < jiff::Timestamp::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(status: InvoiceStatus) -> Invoice {
        let epoch = Timestamp::from(jiff::Timestamp::UNIX_EPOCH);
        Invoice {
            id: Uuid::new_v4(),
            dealer_id: Uuid::new_v4(),
            invoice_number: "INV-2026-00001".to_string(),
            current_status: status,
            total_amount: BigDecimal::from(1200),
            paid_with: None,
            issued_at: None,
            due_at: None,
            paid_at: None,
            created_by: Uuid::new_v4(),
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn only_issued_invoices_are_payable() {
        assert!(!invoice(InvoiceStatus::Draft).is_payable());
        assert!(invoice(InvoiceStatus::Issued).is_payable());
        assert!(!invoice(InvoiceStatus::Paid).is_payable());
        assert!(!invoice(InvoiceStatus::Cancelled).is_payable());
    }

    #[test]
    fn overdue_requires_payable_status_and_past_due_date() {
        let mut inv = invoice(InvoiceStatus::Issued);
        assert!(!inv.is_overdue());

        inv.due_at = Some(Timestamp::from(jiff::Timestamp::UNIX_EPOCH));
        assert!(inv.is_overdue());

        inv.current_status = InvoiceStatus::Paid;
        assert!(!inv.is_overdue());
    }
}
