//! Vehicle status event model (append-only lifecycle log).

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::vehicle_status_events;
use crate::types::VehicleStatus;

/// One recorded lifecycle transition of a vehicle.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = vehicle_status_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleStatusEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// Vehicle the transition belongs to.
    pub vehicle_id: Uuid,
    /// Status before the transition; `None` for the initial event.
    pub previous_status: Option<VehicleStatus>,
    /// Status after the transition.
    pub new_status: VehicleStatus,
    /// Account that performed the transition.
    pub changed_by: Uuid,
    /// Optional note (e.g. vessel name, delay reason).
    pub note: Option<String>,
    /// Timestamp when the transition was recorded.
    pub created_at: Timestamp,
}

/// Data for appending a new status event.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = vehicle_status_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVehicleStatusEvent {
    /// Vehicle the transition belongs to.
    pub vehicle_id: Uuid,
    /// Status before the transition.
    pub previous_status: Option<VehicleStatus>,
    /// Status after the transition.
    pub new_status: VehicleStatus,
    /// Account that performed the transition.
    pub changed_by: Uuid,
    /// Optional note.
    pub note: Option<String>,
}
