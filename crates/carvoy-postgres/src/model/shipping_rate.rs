//! Shipping rate reference model.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::shipping_rates;

/// Transport price from an auction city to a destination port.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = shipping_rates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShippingRate {
    /// Unique rate identifier.
    pub id: Uuid,
    /// Departure auction city.
    pub city_id: Uuid,
    /// Destination port.
    pub port_id: Uuid,
    /// Transport price; always positive.
    pub amount: BigDecimal,
    /// Timestamp when the rate was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new shipping rate.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = shipping_rates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewShippingRate {
    /// Departure auction city.
    pub city_id: Uuid,
    /// Destination port.
    pub port_id: Uuid,
    /// Transport price.
    pub amount: BigDecimal,
}

/// Data for updating a shipping rate.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = shipping_rates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateShippingRate {
    /// Transport price.
    pub amount: Option<BigDecimal>,
}
