//! Balance transaction kind enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Classifies an entry in the balance ledger.
///
/// Corresponds to the `transaction_kind` PostgreSQL enum. Amounts are signed:
/// credits are positive, debits negative.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionKind"]
pub enum TransactionKind {
    /// Approved balance request credit
    #[db_rename = "top_up"]
    #[serde(rename = "top_up")]
    #[default]
    TopUp,

    /// Invoice settled from balance
    #[db_rename = "invoice_payment"]
    #[serde(rename = "invoice_payment")]
    InvoicePayment,

    /// Manual admin correction
    #[db_rename = "adjustment"]
    #[serde(rename = "adjustment")]
    Adjustment,

    /// Returned funds
    #[db_rename = "refund"]
    #[serde(rename = "refund")]
    Refund,
}

impl TransactionKind {
    /// Returns whether entries of this kind normally credit the balance.
    #[inline]
    pub fn is_credit(self) -> bool {
        matches!(self, TransactionKind::TopUp | TransactionKind::Refund)
    }
}
