//! Country reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::countries;

/// A country in the geography reference tree.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Country {
    /// Unique country identifier.
    pub id: Uuid,
    /// Country name (unique).
    pub display_name: String,
    /// ISO 3166-1 alpha-2 code (unique).
    pub iso_code: String,
}

/// Data for creating a new country.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCountry {
    /// Country name.
    pub display_name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: String,
}

/// Data for updating a country.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCountry {
    /// Country name.
    pub display_name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: Option<String>,
}
