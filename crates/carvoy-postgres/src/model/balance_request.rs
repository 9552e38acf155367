//! Balance request model.
//!
//! A dealer-submitted request to add funds to their balance, settled
//! (approved or rejected) by an admin exactly once. Approval credits the
//! balance and writes a ledger entry inside the same transaction.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::balance_requests;
use crate::types::BalanceRequestStatus;

/// Main balance request model.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = balance_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BalanceRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Requesting dealer account.
    pub dealer_id: Uuid,
    /// Requested amount; always positive.
    pub amount: BigDecimal,
    /// Review status.
    pub current_status: BalanceRequestStatus,
    /// Storage key of the uploaded payment receipt.
    pub receipt_path: Option<String>,
    /// Note from the dealer.
    pub dealer_note: Option<String>,
    /// Note from the reviewing admin.
    pub admin_note: Option<String>,
    /// Admin who settled the request.
    pub processed_by: Option<Uuid>,
    /// Timestamp when the request was settled.
    pub processed_at: Option<Timestamp>,
    /// Timestamp when the request was created.
    pub created_at: Timestamp,
    /// Timestamp when the request was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new balance request.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = balance_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewBalanceRequest {
    /// Requesting dealer account.
    pub dealer_id: Uuid,
    /// Requested amount.
    pub amount: BigDecimal,
    /// Storage key of the uploaded payment receipt.
    pub receipt_path: Option<String>,
    /// Note from the dealer.
    pub dealer_note: Option<String>,
}

/// Data for settling a balance request.
///
/// Applied only when the row is still pending; see
/// [`BalanceRequestRepository::settle_balance_request`].
///
/// [`BalanceRequestRepository::settle_balance_request`]: crate::query::BalanceRequestRepository::settle_balance_request
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = balance_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SettleBalanceRequest {
    /// Resulting status (approved or rejected).
    pub current_status: BalanceRequestStatus,
    /// Note from the reviewing admin.
    pub admin_note: Option<String>,
    /// Admin who settled the request.
    pub processed_by: Uuid,
    /// Timestamp when the request was settled.
    pub processed_at: Timestamp,
}

impl BalanceRequest {
    /// Returns whether the request belongs to the given dealer.
    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.dealer_id == account_id
    }

    /// Returns whether the request can still be settled.
    pub fn is_pending(&self) -> bool {
        self.current_status.is_pending()
    }

    /// Returns whether the request has an uploaded receipt.
    pub fn has_receipt(&self) -> bool {
        self.receipt_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}
