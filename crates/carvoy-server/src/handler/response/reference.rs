//! Reference data response types (geography, catalog, rates).

use bigdecimal::BigDecimal;
use carvoy_postgres::model::{
    Auction, City, Country, Make, Port, ShippingRate, State, VehicleModel,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A country.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryItem {
    /// Unique country identifier.
    pub id: Uuid,
    /// Country name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: String,
}

impl From<Country> for CountryItem {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.display_name,
            iso_code: country.iso_code,
        }
    }
}

/// A state or province.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateItem {
    /// Unique state identifier.
    pub id: Uuid,
    /// Owning country.
    pub country_id: Uuid,
    /// State name.
    pub name: String,
    /// Short code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<State> for StateItem {
    fn from(state: State) -> Self {
        Self {
            id: state.id,
            country_id: state.country_id,
            name: state.display_name,
            code: state.state_code,
        }
    }
}

/// A city.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityItem {
    /// Unique city identifier.
    pub id: Uuid,
    /// Owning state.
    pub state_id: Uuid,
    /// City name.
    pub name: String,
}

impl From<City> for CityItem {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            state_id: city.state_id,
            name: city.display_name,
        }
    }
}

/// A destination port.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortItem {
    /// Unique port identifier.
    pub id: Uuid,
    /// Owning state/region.
    pub state_id: Uuid,
    /// Port name.
    pub name: String,
    /// Port code.
    pub code: String,
}

impl From<Port> for PortItem {
    fn from(port: Port) -> Self {
        Self {
            id: port.id,
            state_id: port.state_id,
            name: port.display_name,
            code: port.port_code,
        }
    }
}

/// An auction house.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    /// Unique auction identifier.
    pub id: Uuid,
    /// Auction name.
    pub name: String,
    /// City the auction operates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<Uuid>,
}

impl From<Auction> for AuctionItem {
    fn from(auction: Auction) -> Self {
        Self {
            id: auction.id,
            name: auction.display_name,
            city_id: auction.city_id,
        }
    }
}

/// A vehicle make.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MakeItem {
    /// Unique make identifier.
    pub id: Uuid,
    /// Make name.
    pub name: String,
}

impl From<Make> for MakeItem {
    fn from(make: Make) -> Self {
        Self {
            id: make.id,
            name: make.display_name,
        }
    }
}

/// A vehicle model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelItem {
    /// Unique model identifier.
    pub id: Uuid,
    /// Owning make.
    pub make_id: Uuid,
    /// Model name.
    pub name: String,
}

impl From<VehicleModel> for ModelItem {
    fn from(model: VehicleModel) -> Self {
        Self {
            id: model.id,
            make_id: model.make_id,
            name: model.display_name,
        }
    }
}

/// A city-to-port shipping rate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRateItem {
    /// Unique rate identifier.
    pub id: Uuid,
    /// Departure auction city.
    pub city_id: Uuid,
    /// Destination port.
    pub port_id: Uuid,
    /// Transport price.
    pub amount: BigDecimal,
}

impl From<ShippingRate> for ShippingRateItem {
    fn from(rate: ShippingRate) -> Self {
        Self {
            id: rate.id,
            city_id: rate.city_id,
            port_id: rate.port_id,
            amount: rate.amount,
        }
    }
}
