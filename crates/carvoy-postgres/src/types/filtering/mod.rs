//! Filter types for list queries.

mod balance;
mod vehicles;

pub use balance::{BalanceRequestFilter, TransactionFilter};
pub use vehicles::{InvoiceFilter, VehicleFilter};
