//! Invoice status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the settlement state of an invoice.
///
/// Corresponds to the `invoice_status` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::InvoiceStatus"]
pub enum InvoiceStatus {
    /// Being prepared by an admin, not yet visible as payable
    #[db_rename = "draft"]
    #[serde(rename = "draft")]
    #[default]
    Draft,

    /// Issued to the dealer and awaiting payment
    #[db_rename = "issued"]
    #[serde(rename = "issued")]
    Issued,

    /// Settled from balance or by an external payment
    #[db_rename = "paid"]
    #[serde(rename = "paid")]
    Paid,

    /// Voided by an admin
    #[db_rename = "cancelled"]
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl InvoiceStatus {
    /// Returns whether the invoice can still be edited.
    #[inline]
    pub fn is_editable(self) -> bool {
        matches!(self, InvoiceStatus::Draft)
    }

    /// Returns whether the invoice is awaiting payment.
    #[inline]
    pub fn is_payable(self) -> bool {
        matches!(self, InvoiceStatus::Issued)
    }

    /// Returns whether the invoice has reached a final state.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}
