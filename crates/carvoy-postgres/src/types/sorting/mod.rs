//! Sort orders for list queries.

mod vehicles;

pub use vehicles::{SortDirection, VehicleSort, VehicleSortBy};
