//! City reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::cities;

/// A city within a state; auction locations reference cities.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct City {
    /// Unique city identifier.
    pub id: Uuid,
    /// Owning state.
    pub state_id: Uuid,
    /// City name (unique within the state).
    pub display_name: String,
}

/// Data for creating a new city.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCity {
    /// Owning state.
    pub state_id: Uuid,
    /// City name.
    pub display_name: String,
}

/// Data for updating a city.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = cities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCity {
    /// City name.
    pub display_name: Option<String>,
}
