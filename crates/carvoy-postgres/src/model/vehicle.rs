//! Vehicle model for PostgreSQL database operations.
//!
//! A vehicle is purchased by a dealer at a US/Canada auction and moves through
//! the transport pipeline towards a destination port. The current lifecycle
//! stage lives on the row; every transition is also recorded as a
//! [`VehicleStatusEvent`].
//!
//! [`VehicleStatusEvent`]: crate::model::VehicleStatusEvent

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::{Date, Timestamp};
use uuid::Uuid;

use crate::schema::vehicles;
use crate::types::VehicleStatus;

/// Main vehicle model.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: Uuid,
    /// Owning dealer account.
    pub dealer_id: Uuid,
    /// Vehicle make.
    pub make_id: Uuid,
    /// Vehicle model (must belong to the make).
    pub model_id: Uuid,
    /// Auction where the vehicle was purchased.
    pub auction_id: Option<Uuid>,
    /// Auction city; decides the shipping rate together with the port.
    pub city_id: Option<Uuid>,
    /// Destination port.
    pub port_id: Option<Uuid>,
    /// 17-character vehicle identification number (unique).
    pub vin: String,
    /// Model year.
    pub model_year: i32,
    /// Exterior color as listed at the auction.
    pub exterior_color: Option<String>,
    /// Auction lot number.
    pub lot_number: Option<String>,
    /// Hammer price at the auction.
    pub purchase_price: Option<BigDecimal>,
    /// Date of the auction purchase.
    pub purchased_on: Option<Date>,
    /// Ocean container number once loaded.
    pub container_number: Option<String>,
    /// Estimated arrival at the destination port.
    pub estimated_arrival_on: Option<Date>,
    /// Current lifecycle stage.
    pub current_status: VehicleStatus,
    /// Per-vehicle transport price override; falls back to the route rate.
    pub transport_price: Option<BigDecimal>,
    /// Free-form admin notes.
    pub notes: Option<String>,
    /// Timestamp when the vehicle was created.
    pub created_at: Timestamp,
    /// Timestamp when the vehicle was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the vehicle was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new vehicle.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVehicle {
    /// Owning dealer account.
    pub dealer_id: Uuid,
    /// Vehicle make.
    pub make_id: Uuid,
    /// Vehicle model.
    pub model_id: Uuid,
    /// Auction where the vehicle was purchased.
    pub auction_id: Option<Uuid>,
    /// Auction city.
    pub city_id: Option<Uuid>,
    /// Destination port.
    pub port_id: Option<Uuid>,
    /// 17-character vehicle identification number.
    pub vin: String,
    /// Model year.
    pub model_year: i32,
    /// Exterior color.
    pub exterior_color: Option<String>,
    /// Auction lot number.
    pub lot_number: Option<String>,
    /// Hammer price at the auction.
    pub purchase_price: Option<BigDecimal>,
    /// Date of the auction purchase.
    pub purchased_on: Option<Date>,
    /// Per-vehicle transport price override.
    pub transport_price: Option<BigDecimal>,
    /// Free-form admin notes.
    pub notes: Option<String>,
}

/// Data for updating a vehicle.
///
/// `current_status` is deliberately absent: lifecycle changes go through the
/// status-change operation so the event log and notifications stay consistent.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateVehicle {
    /// Vehicle make.
    pub make_id: Option<Uuid>,
    /// Vehicle model.
    pub model_id: Option<Uuid>,
    /// Auction where the vehicle was purchased.
    pub auction_id: Option<Option<Uuid>>,
    /// Auction city.
    pub city_id: Option<Option<Uuid>>,
    /// Destination port.
    pub port_id: Option<Option<Uuid>>,
    /// Exterior color.
    pub exterior_color: Option<Option<String>>,
    /// Auction lot number.
    pub lot_number: Option<Option<String>>,
    /// Hammer price at the auction.
    pub purchase_price: Option<Option<BigDecimal>>,
    /// Date of the auction purchase.
    pub purchased_on: Option<Option<Date>>,
    /// Ocean container number.
    pub container_number: Option<Option<String>>,
    /// Estimated arrival at the destination port.
    pub estimated_arrival_on: Option<Option<Date>>,
    /// Per-vehicle transport price override.
    pub transport_price: Option<Option<BigDecimal>>,
    /// Free-form admin notes.
    pub notes: Option<Option<String>>,
}

impl Vehicle {
    /// Returns whether the vehicle is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether the vehicle belongs to the given dealer.
    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.dealer_id == account_id
    }

    /// Returns whether the lifecycle can move to `next`.
    pub fn can_transition_to(&self, next: VehicleStatus) -> bool {
        self.current_status.can_transition_to(next)
    }
}
