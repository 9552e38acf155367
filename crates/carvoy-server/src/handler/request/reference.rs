//! Reference data request types (geography, catalog, rates).

use bigdecimal::BigDecimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a country.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryRequest {
    /// Country name.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    #[validate(length(equal = 2))]
    pub iso_code: String,
}

/// Request payload for creating a state.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStateRequest {
    /// Owning country.
    pub country_id: Uuid,
    /// State name.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Short code (e.g. "TX").
    #[validate(length(max = 10))]
    pub code: Option<String>,
}

/// Request payload for creating a city.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCityRequest {
    /// Owning state.
    pub state_id: Uuid,
    /// City name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request payload for creating a port.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortRequest {
    /// Owning state/region.
    pub state_id: Uuid,
    /// Port name.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Port code.
    #[validate(length(min = 3, max = 10))]
    pub code: String,
}

/// Request payload for creating an auction.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionRequest {
    /// Auction name.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// City the auction operates from.
    pub city_id: Option<Uuid>,
}

/// Request payload for creating a make.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMakeRequest {
    /// Make name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request payload for creating a model under a make.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    /// Owning make.
    pub make_id: Uuid,
    /// Model name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request payload for renaming a reference item.
///
/// Shared by the geography and catalog update endpoints, which only carry a
/// display name.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNameRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request payload for creating a shipping rate.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShippingRateRequest {
    /// Departure auction city.
    pub city_id: Uuid,
    /// Destination port.
    pub port_id: Uuid,
    /// Transport price; must be positive.
    pub amount: BigDecimal,
}

/// Request payload for updating a shipping rate.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShippingRateRequest {
    /// New transport price; must be positive.
    pub amount: BigDecimal,
}
