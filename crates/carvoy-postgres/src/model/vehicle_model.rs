//! Vehicle model (catalog) reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::vehicle_models;

/// A model belonging to a make (e.g. Camry under Toyota).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = vehicle_models)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleModel {
    /// Unique model identifier.
    pub id: Uuid,
    /// Owning make.
    pub make_id: Uuid,
    /// Model name (unique within the make).
    pub display_name: String,
}

/// Data for creating a new model.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = vehicle_models)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVehicleModel {
    /// Owning make.
    pub make_id: Uuid,
    /// Model name.
    pub display_name: String,
}

/// Data for updating a model.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = vehicle_models)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateVehicleModel {
    /// Model name.
    pub display_name: Option<String>,
}
