//! Auction house reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::auctions;

/// An auction house/location where vehicles are purchased.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = auctions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Auction {
    /// Unique auction identifier.
    pub id: Uuid,
    /// Auction name (unique).
    pub display_name: String,
    /// City the auction operates from.
    pub city_id: Option<Uuid>,
}

/// Data for creating a new auction.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = auctions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAuction {
    /// Auction name.
    pub display_name: String,
    /// City the auction operates from.
    pub city_id: Option<Uuid>,
}

/// Data for updating an auction.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = auctions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateAuction {
    /// Auction name.
    pub display_name: Option<String>,
    /// City the auction operates from.
    pub city_id: Option<Option<Uuid>>,
}
