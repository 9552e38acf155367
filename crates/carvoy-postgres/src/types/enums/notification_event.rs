//! Notification event enumeration for account notifications.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the event that produced an account notification.
///
/// This enumeration corresponds to the `notification_event` PostgreSQL enum and
/// covers vehicle lifecycle updates, balance settlement, and invoice events.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::NotificationEvent"]
pub enum NotificationEvent {
    /// A vehicle moved to a new lifecycle status
    #[db_rename = "vehicle_status_changed"]
    #[serde(rename = "vehicle_status_changed")]
    #[default]
    VehicleStatusChanged,

    /// A balance request was approved
    #[db_rename = "balance_approved"]
    #[serde(rename = "balance_approved")]
    BalanceApproved,

    /// A balance request was rejected
    #[db_rename = "balance_rejected"]
    #[serde(rename = "balance_rejected")]
    BalanceRejected,

    /// An invoice was issued to the dealer
    #[db_rename = "invoice_issued"]
    #[serde(rename = "invoice_issued")]
    InvoiceIssued,

    /// An invoice was settled
    #[db_rename = "invoice_paid"]
    #[serde(rename = "invoice_paid")]
    InvoicePaid,

    /// System-wide announcement
    #[db_rename = "system_announcement"]
    #[serde(rename = "system_announcement")]
    SystemAnnouncement,
}

impl NotificationEvent {
    /// Returns whether this event relates to the balance ledger.
    #[inline]
    pub fn is_balance_related(self) -> bool {
        matches!(
            self,
            NotificationEvent::BalanceApproved
                | NotificationEvent::BalanceRejected
                | NotificationEvent::InvoicePaid
        )
    }

    /// Returns whether this event relates to an invoice.
    #[inline]
    pub fn is_invoice_related(self) -> bool {
        matches!(
            self,
            NotificationEvent::InvoiceIssued | NotificationEvent::InvoicePaid
        )
    }
}
