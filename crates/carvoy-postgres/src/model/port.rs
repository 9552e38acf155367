//! Destination port reference model.

use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::ports;

/// A destination sea port (e.g. Poti, Batumi).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = ports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Port {
    /// Unique port identifier.
    pub id: Uuid,
    /// Owning state/region.
    pub state_id: Uuid,
    /// Port name.
    pub display_name: String,
    /// UN/LOCODE-style port code (unique).
    pub port_code: String,
}

/// Data for creating a new port.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = ports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPort {
    /// Owning state/region.
    pub state_id: Uuid,
    /// Port name.
    pub display_name: String,
    /// Port code.
    pub port_code: String,
}

/// Data for updating a port.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = ports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdatePort {
    /// Port name.
    pub display_name: Option<String>,
    /// Port code.
    pub port_code: Option<String>,
}
