//! Balance ledger entry model.
//!
//! The ledger is append-only: every balance mutation writes one row with the
//! signed amount and the balance after the mutation.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::balance_transactions;
use crate::types::TransactionKind;

/// A single entry in the balance ledger.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = balance_transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BalanceTransaction {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Account whose balance changed.
    pub account_id: Uuid,
    /// Entry classification.
    pub kind: TransactionKind,
    /// Signed amount; credits positive, debits negative.
    pub amount: BigDecimal,
    /// Balance immediately after applying this entry.
    pub balance_after: BigDecimal,
    /// Settled invoice, for invoice payments.
    pub invoice_id: Option<Uuid>,
    /// Approved balance request, for top-ups.
    pub balance_request_id: Option<Uuid>,
    /// Free-form note.
    pub note: Option<String>,
    /// Acting account (admin for adjustments, dealer for payments).
    pub created_by: Option<Uuid>,
    /// Timestamp when the entry was created.
    pub created_at: Timestamp,
}

/// Data for appending a new ledger entry.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = balance_transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewBalanceTransaction {
    /// Account whose balance changed.
    pub account_id: Uuid,
    /// Entry classification.
    pub kind: TransactionKind,
    /// Signed amount.
    pub amount: BigDecimal,
    /// Balance immediately after applying this entry.
    pub balance_after: BigDecimal,
    /// Settled invoice, for invoice payments.
    pub invoice_id: Option<Uuid>,
    /// Approved balance request, for top-ups.
    pub balance_request_id: Option<Uuid>,
    /// Free-form note.
    pub note: Option<String>,
    /// Acting account.
    pub created_by: Option<Uuid>,
}

impl BalanceTransaction {
    /// Returns whether this entry credited the balance.
    pub fn is_credit(&self) -> bool {
        self.amount > BigDecimal::from(0)
    }
}
