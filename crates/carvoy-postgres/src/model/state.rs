//! State/province reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::states;

/// A state or province within a country.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = states)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct State {
    /// Unique state identifier.
    pub id: Uuid,
    /// Owning country.
    pub country_id: Uuid,
    /// State name (unique within the country).
    pub display_name: String,
    /// Short code (e.g. "TX", "ON").
    pub state_code: Option<String>,
}

/// Data for creating a new state.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = states)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewState {
    /// Owning country.
    pub country_id: Uuid,
    /// State name.
    pub display_name: String,
    /// Short code.
    pub state_code: Option<String>,
}

/// Data for updating a state.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = states)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateState {
    /// State name.
    pub display_name: Option<String>,
    /// Short code.
    pub state_code: Option<Option<String>>,
}
