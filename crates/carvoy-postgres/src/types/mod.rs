//! Shared database types: enum mappings, filters, sort orders, and
//! constraint-violation handling.

mod constraints;
mod enums;
pub mod filtering;
pub mod sorting;

pub use constraints::{
    AccountConstraint, BalanceRequestConstraint, CatalogConstraint, ConstraintViolation,
    GeoConstraint, InvoiceConstraint, ShippingRateConstraint, VehicleConstraint,
};
pub use enums::{
    AccountRole, BalanceRequestStatus, InvoiceStatus, NotificationEvent, PaymentMethod,
    TransactionKind, VehicleStatus,
};
pub use filtering::{BalanceRequestFilter, InvoiceFilter, TransactionFilter, VehicleFilter};
pub use sorting::{SortDirection, VehicleSort, VehicleSortBy};
