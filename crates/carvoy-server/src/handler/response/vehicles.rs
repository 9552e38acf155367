//! Vehicle response types.

use bigdecimal::BigDecimal;
use carvoy_postgres::model::{Vehicle, VehicleStatusEvent};
use carvoy_postgres::types::VehicleStatus;
use jiff::Timestamp;
use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vehicle as returned by listings and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleView {
    /// Unique vehicle identifier.
    pub id: Uuid,
    /// Owning dealer account.
    pub dealer_id: Uuid,
    /// Vehicle make.
    pub make_id: Uuid,
    /// Vehicle model.
    pub model_id: Uuid,
    /// Auction where the vehicle was purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_id: Option<Uuid>,
    /// Auction city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<Uuid>,
    /// Destination port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_id: Option<Uuid>,
    /// Vehicle identification number.
    pub vin: String,
    /// Model year.
    pub model_year: i32,
    /// Exterior color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exterior_color: Option<String>,
    /// Auction lot number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,
    /// Hammer price at the auction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<BigDecimal>,
    /// Date of the auction purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_on: Option<Date>,
    /// Ocean container number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    /// Estimated arrival at the destination port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_arrival_on: Option<Date>,
    /// Current lifecycle stage.
    pub status: VehicleStatus,
    /// Per-vehicle transport price override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_price: Option<BigDecimal>,
    /// Free-form admin notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the vehicle was created.
    pub created_at: Timestamp,
    /// When the vehicle was last updated.
    pub updated_at: Timestamp,
}

impl From<Vehicle> for VehicleView {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            dealer_id: vehicle.dealer_id,
            make_id: vehicle.make_id,
            model_id: vehicle.model_id,
            auction_id: vehicle.auction_id,
            city_id: vehicle.city_id,
            port_id: vehicle.port_id,
            vin: vehicle.vin,
            model_year: vehicle.model_year,
            exterior_color: vehicle.exterior_color,
            lot_number: vehicle.lot_number,
            purchase_price: vehicle.purchase_price,
            purchased_on: vehicle.purchased_on.map(Into::into),
            container_number: vehicle.container_number,
            estimated_arrival_on: vehicle.estimated_arrival_on.map(Into::into),
            status: vehicle.current_status,
            transport_price: vehicle.transport_price,
            notes: vehicle.notes,
            created_at: vehicle.created_at.into(),
            updated_at: vehicle.updated_at.into(),
        }
    }
}

/// One entry of a vehicle's lifecycle history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusEventView {
    /// Unique event identifier.
    pub id: Uuid,
    /// Status before the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<VehicleStatus>,
    /// Status after the transition.
    pub new_status: VehicleStatus,
    /// Account that performed the transition.
    pub changed_by: Uuid,
    /// Optional note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the transition was recorded.
    pub created_at: Timestamp,
}

impl From<VehicleStatusEvent> for StatusEventView {
    fn from(event: VehicleStatusEvent) -> Self {
        Self {
            id: event.id,
            previous_status: event.previous_status,
            new_status: event.new_status,
            changed_by: event.changed_by,
            note: event.note,
            created_at: event.created_at.into(),
        }
    }
}
