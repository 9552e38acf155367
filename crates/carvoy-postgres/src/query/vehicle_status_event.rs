//! Vehicle status event repository (append-only lifecycle log).

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewVehicleStatusEvent, VehicleStatusEvent};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for vehicle status event database operations.
pub trait VehicleStatusEventRepository {
    /// Appends a new lifecycle event.
    fn create_status_event(
        &mut self,
        new_event: NewVehicleStatusEvent,
    ) -> impl Future<Output = PgResult<VehicleStatusEvent>> + Send;

    /// Lists all lifecycle events of a vehicle, oldest first.
    fn list_status_events(
        &mut self,
        vehicle_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<VehicleStatusEvent>>> + Send;
}

impl VehicleStatusEventRepository for PgConnection {
    async fn create_status_event(
        &mut self,
        new_event: NewVehicleStatusEvent,
    ) -> PgResult<VehicleStatusEvent> {
        use schema::vehicle_status_events;

        diesel::insert_into(vehicle_status_events::table)
            .values(&new_event)
            .returning(VehicleStatusEvent::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_status_events(
        &mut self,
        vehicle_id: Uuid,
    ) -> PgResult<Vec<VehicleStatusEvent>> {
        use schema::vehicle_status_events::{self, dsl};

        vehicle_status_events::table
            .filter(dsl::vehicle_id.eq(vehicle_id))
            .order(dsl::created_at.asc())
            .select(VehicleStatusEvent::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }
}
