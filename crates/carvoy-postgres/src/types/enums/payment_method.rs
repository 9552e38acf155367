//! Payment method enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How an invoice was settled.
///
/// Corresponds to the `payment_method` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::PaymentMethod"]
pub enum PaymentMethod {
    /// Deducted from the dealer's account balance
    #[db_rename = "balance"]
    #[serde(rename = "balance")]
    #[default]
    Balance,

    /// Settled outside the platform and confirmed by an admin
    #[db_rename = "wire_transfer"]
    #[serde(rename = "wire_transfer")]
    WireTransfer,
}
