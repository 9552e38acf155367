//! Vehicle and invoice list filters.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{InvoiceStatus, VehicleStatus};

/// Filter criteria for vehicle listings.
///
/// All fields are optional and combine with `AND` semantics. Dealers are
/// always constrained to their own vehicles by setting `dealer_id`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VehicleFilter {
    /// Restrict to a single dealer.
    pub dealer_id: Option<Uuid>,
    /// Restrict to a lifecycle status.
    pub status: Option<VehicleStatus>,
    /// Restrict to a make.
    pub make_id: Option<Uuid>,
    /// Inclusive lower bound on the model year.
    pub year_from: Option<i32>,
    /// Inclusive upper bound on the model year.
    pub year_to: Option<i32>,
    /// Case-insensitive substring match on VIN or lot number.
    pub search: Option<String>,
}

impl VehicleFilter {
    /// Returns a filter scoped to a dealer.
    pub fn for_dealer(dealer_id: Uuid) -> Self {
        Self {
            dealer_id: Some(dealer_id),
            ..Self::default()
        }
    }

    /// Returns whether any criterion is set.
    pub fn is_empty(&self) -> bool {
        self.dealer_id.is_none()
            && self.status.is_none()
            && self.make_id.is_none()
            && self.year_from.is_none()
            && self.year_to.is_none()
            && self.search.is_none()
    }

    /// Returns the search term prepared for a `LIKE` pattern, if present.
    ///
    /// Empty and whitespace-only terms are dropped.
    pub fn search_pattern(&self) -> Option<String> {
        let term = self.search.as_deref()?.trim();
        if term.is_empty() {
            return None;
        }
        Some(format!("%{}%", term))
    }
}

/// Filter criteria for invoice listings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct InvoiceFilter {
    /// Restrict to a single dealer.
    pub dealer_id: Option<Uuid>,
    /// Restrict to a settlement status.
    pub status: Option<InvoiceStatus>,
}

impl InvoiceFilter {
    /// Returns a filter scoped to a dealer.
    pub fn for_dealer(dealer_id: Uuid) -> Self {
        Self {
            dealer_id: Some(dealer_id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_reports_empty() {
        assert!(VehicleFilter::default().is_empty());
        assert!(!VehicleFilter::for_dealer(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn search_pattern_wraps_and_trims() {
        let filter = VehicleFilter {
            search: Some("  1FTEW1  ".to_string()),
            ..VehicleFilter::default()
        };
        assert_eq!(filter.search_pattern().as_deref(), Some("%1FTEW1%"));
    }

    #[test]
    fn blank_search_is_dropped() {
        let filter = VehicleFilter {
            search: Some("   ".to_string()),
            ..VehicleFilter::default()
        };
        assert!(filter.search_pattern().is_none());
    }
}
