//! Vehicle photo model.
//!
//! A row per uploaded photo. The stored `storage_prefix` identifies the
//! variant family in object storage; the actual objects are
//! `<prefix>-<variant>.webp`, one per configured width.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::vehicle_photos;

/// A photo attached to a vehicle.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = vehicle_photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehiclePhoto {
    /// Unique photo identifier.
    pub id: Uuid,
    /// Owning vehicle.
    pub vehicle_id: Uuid,
    /// Object-key prefix of the variant family (unique).
    pub storage_prefix: String,
    /// Content type of the original upload.
    pub content_type: String,
    /// Size of the original upload in bytes.
    pub size_bytes: i64,
    /// Whether this is the vehicle's cover photo.
    pub is_primary: bool,
    /// Sort position within the vehicle's gallery.
    pub position: i32,
    /// Timestamp when the photo was uploaded.
    pub created_at: Timestamp,
}

/// Data for creating a new vehicle photo.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = vehicle_photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVehiclePhoto {
    /// Owning vehicle.
    pub vehicle_id: Uuid,
    /// Object-key prefix of the variant family.
    pub storage_prefix: String,
    /// Content type of the original upload.
    pub content_type: String,
    /// Size of the original upload in bytes.
    pub size_bytes: i64,
    /// Whether this is the vehicle's cover photo.
    pub is_primary: bool,
    /// Sort position within the vehicle's gallery.
    pub position: i32,
}
