//! Vehicle make reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::makes;

/// A vehicle manufacturer (e.g. Toyota, Ford).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = makes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Make {
    /// Unique make identifier.
    pub id: Uuid,
    /// Make name (unique).
    pub display_name: String,
}

/// Data for creating a new make.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = makes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewMake {
    /// Make name.
    pub display_name: String,
}

/// Data for updating a make.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = makes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateMake {
    /// Make name.
    pub display_name: Option<String>,
}
