//! Vehicle request types.

use bigdecimal::BigDecimal;
use carvoy_postgres::types::{
    SortDirection, VehicleFilter, VehicleSort, VehicleSortBy, VehicleStatus,
};
use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Validates a 17-character VIN (letters I, O, Q are never used).
pub(crate) fn validate_vin(vin: &str) -> Result<(), ValidationError> {
    let normalized = vin.trim();
    if normalized.len() != 17 {
        return Err(ValidationError::new("vin_length"));
    }
    let valid = normalized
        .chars()
        .all(|c| c.is_ascii_alphanumeric() && !matches!(c.to_ascii_uppercase(), 'I' | 'O' | 'Q'));
    if !valid {
        return Err(ValidationError::new("vin_charset"));
    }
    Ok(())
}

/// Request payload for registering a new vehicle.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    /// Owning dealer account.
    pub dealer_id: Uuid,
    /// Vehicle make.
    pub make_id: Uuid,
    /// Vehicle model; must belong to the make.
    pub model_id: Uuid,
    /// Auction where the vehicle was purchased.
    pub auction_id: Option<Uuid>,
    /// Auction city.
    pub city_id: Option<Uuid>,
    /// Destination port.
    pub port_id: Option<Uuid>,
    /// Vehicle identification number.
    #[validate(custom(function = validate_vin))]
    pub vin: String,
    /// Model year.
    #[validate(range(min = 1900, max = 2100))]
    pub model_year: i32,
    /// Exterior color.
    #[validate(length(max = 50))]
    pub exterior_color: Option<String>,
    /// Auction lot number.
    #[validate(length(max = 50))]
    pub lot_number: Option<String>,
    /// Hammer price at the auction.
    pub purchase_price: Option<BigDecimal>,
    /// Date of the auction purchase.
    pub purchased_on: Option<Date>,
    /// Per-vehicle transport price override.
    pub transport_price: Option<BigDecimal>,
    /// Free-form notes.
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Request payload for updating a vehicle.
///
/// Omitted fields are left unchanged; explicit `null` is not distinguished
/// from omission except for the fields typed `Option<Option<_>>` downstream.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    /// Vehicle make.
    pub make_id: Option<Uuid>,
    /// Vehicle model.
    pub model_id: Option<Uuid>,
    /// Auction where the vehicle was purchased.
    pub auction_id: Option<Uuid>,
    /// Auction city.
    pub city_id: Option<Uuid>,
    /// Destination port.
    pub port_id: Option<Uuid>,
    /// Exterior color.
    #[validate(length(max = 50))]
    pub exterior_color: Option<String>,
    /// Auction lot number.
    #[validate(length(max = 50))]
    pub lot_number: Option<String>,
    /// Hammer price at the auction.
    pub purchase_price: Option<BigDecimal>,
    /// Date of the auction purchase.
    pub purchased_on: Option<Date>,
    /// Ocean container number.
    #[validate(length(max = 30))]
    pub container_number: Option<String>,
    /// Estimated arrival at the destination port.
    pub estimated_arrival_on: Option<Date>,
    /// Per-vehicle transport price override.
    pub transport_price: Option<BigDecimal>,
    /// Free-form notes.
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Request payload for moving a vehicle to a new lifecycle status.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeVehicleStatusRequest {
    /// The status to move to.
    pub status: VehicleStatus,
    /// Optional note recorded with the transition.
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

/// Query parameters for vehicle listings.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListParams {
    /// Restrict to a single dealer (admins only; dealers are always scoped
    /// to themselves).
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
    /// Column to sort by.
    pub sort_by: Option<VehicleSortBy>,
    /// Sort direction.
    pub direction: Option<SortDirection>,
    /// Records to skip.
    pub offset: Option<u32>,
    /// Maximum records to return.
    pub limit: Option<u32>,
}

impl VehicleListParams {
    /// Extracts the filter portion of the parameters.
    pub fn filter(&self) -> VehicleFilter {
        VehicleFilter {
            dealer_id: self.dealer_id,
            status: self.status,
            make_id: self.make_id,
            year_from: self.year_from,
            year_to: self.year_to,
            search: self.search.clone(),
        }
    }

    /// Extracts the sort portion of the parameters.
    pub fn sort(&self) -> VehicleSort {
        VehicleSort::new(
            self.sort_by.unwrap_or_default(),
            self.direction.unwrap_or_default(),
        )
    }

    /// Extracts the pagination portion of the parameters.
    pub fn pagination(&self) -> super::PaginationParams {
        super::PaginationParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_vins() {
        assert!(validate_vin("1FTEW1EP5MKD73539").is_ok());
        assert!(validate_vin("wba3a5c58df586802").is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(validate_vin("1FTEW1EP5MKD7353").is_err());
        assert!(validate_vin("1FTEW1EP5MKD735390").is_err());
    }

    #[test]
    fn rejects_forbidden_characters() {
        // 'O' and 'I' never appear in a VIN.
        assert!(validate_vin("OFTEW1EP5MKD73539").is_err());
        assert!(validate_vin("1FTEW1EP5MKD7353I").is_err());
        assert!(validate_vin("1FTEW1EP5-KD73539").is_err());
    }
}
