//! Vehicle list sort order.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Column to sort a vehicle listing by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleSortBy {
    /// Creation time (listing default).
    #[default]
    CreatedAt,
    /// Last update time.
    UpdatedAt,
    /// Model year.
    ModelYear,
    /// Auction purchase date.
    PurchasedOn,
}

/// Direction of a sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns whether this is an ascending order.
    #[inline]
    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// Complete sort order for vehicle listings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VehicleSort {
    /// Column to sort by.
    pub sort_by: VehicleSortBy,
    /// Sort direction.
    pub direction: SortDirection,
}

impl VehicleSort {
    /// Creates a new sort order.
    pub fn new(sort_by: VehicleSortBy, direction: SortDirection) -> Self {
        Self { sort_by, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_newest_first() {
        let sort = VehicleSort::default();
        assert_eq!(sort.sort_by, VehicleSortBy::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn sort_by_parses_from_snake_case() {
        let parsed: VehicleSortBy = "model_year".parse().unwrap();
        assert_eq!(parsed, VehicleSortBy::ModelYear);
    }
}
