//! Vehicle repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{NewVehicle, UpdateVehicle, Vehicle};
use crate::types::sorting::{VehicleSort, VehicleSortBy};
use crate::types::{VehicleFilter, VehicleStatus};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for vehicle database operations.
///
/// Lifecycle transitions are not exposed here as a plain column update; use
/// [`set_vehicle_status`] so callers go through the guarded update that keeps
/// the event log consistent.
///
/// [`set_vehicle_status`]: VehicleRepository::set_vehicle_status
pub trait VehicleRepository {
    /// Creates a new vehicle.
    ///
    /// The VIN is normalized to upper case before inserting.
    fn create_vehicle(
        &mut self,
        new_vehicle: NewVehicle,
    ) -> impl Future<Output = PgResult<Vehicle>> + Send;

    /// Finds a vehicle by its unique identifier.
    ///
    /// Soft-deleted vehicles are excluded.
    fn find_vehicle_by_id(
        &mut self,
        vehicle_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Vehicle>>> + Send;

    /// Finds a vehicle by VIN (case-insensitive).
    fn find_vehicle_by_vin(
        &mut self,
        vin: &str,
    ) -> impl Future<Output = PgResult<Option<Vehicle>>> + Send;

    /// Updates a vehicle with new information.
    fn update_vehicle(
        &mut self,
        vehicle_id: Uuid,
        updates: UpdateVehicle,
    ) -> impl Future<Output = PgResult<Vehicle>> + Send;

    /// Soft deletes a vehicle.
    ///
    /// Returns `None` if the vehicle was not found.
    fn delete_vehicle(
        &mut self,
        vehicle_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Vehicle>>> + Send;

    /// Lists vehicles matching the filter in the requested order.
    fn list_vehicles(
        &mut self,
        filter: VehicleFilter,
        sort: VehicleSort,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Vehicle>>> + Send;

    /// Counts vehicles matching the filter.
    fn count_vehicles(
        &mut self,
        filter: VehicleFilter,
    ) -> impl Future<Output = PgResult<i64>> + Send;

    /// Moves a vehicle to a new lifecycle status.
    ///
    /// The update is guarded on the expected current status so concurrent
    /// transitions cannot double-apply: when the row no longer carries
    /// `expected` the update misses and `None` is returned.
    fn set_vehicle_status(
        &mut self,
        vehicle_id: Uuid,
        expected: VehicleStatus,
        next: VehicleStatus,
    ) -> impl Future<Output = PgResult<Option<Vehicle>>> + Send;

    /// Counts vehicles grouped by lifecycle status, for dashboards.
    fn count_vehicles_by_status(
        &mut self,
        dealer_id: Option<Uuid>,
    ) -> impl Future<Output = PgResult<Vec<(VehicleStatus, i64)>>> + Send;
}

/// Applies a [`VehicleFilter`] to a boxed vehicles query.
macro_rules! apply_vehicle_filter {
    ($query:expr, $filter:expr) => {{
        let mut query = $query;
        let filter = $filter;

        if let Some(dealer_id) = filter.dealer_id {
            query = query.filter(dsl::dealer_id.eq(dealer_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::current_status.eq(status));
        }
        if let Some(make_id) = filter.make_id {
            query = query.filter(dsl::make_id.eq(make_id));
        }
        if let Some(year_from) = filter.year_from {
            query = query.filter(dsl::model_year.ge(year_from));
        }
        if let Some(year_to) = filter.year_to {
            query = query.filter(dsl::model_year.le(year_to));
        }
        if let Some(pattern) = filter.search_pattern() {
            query = query.filter(
                dsl::vin
                    .ilike(pattern.clone())
                    .or(dsl::lot_number.ilike(pattern)),
            );
        }

        query
    }};
}

impl VehicleRepository for PgConnection {
    async fn create_vehicle(&mut self, mut new_vehicle: NewVehicle) -> PgResult<Vehicle> {
        use schema::vehicles;

        new_vehicle.vin = new_vehicle.vin.trim().to_uppercase();

        diesel::insert_into(vehicles::table)
            .values(&new_vehicle)
            .returning(Vehicle::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_vehicle_by_id(&mut self, vehicle_id: Uuid) -> PgResult<Option<Vehicle>> {
        use schema::vehicles::{self, dsl};

        vehicles::table
            .filter(dsl::id.eq(vehicle_id))
            .filter(dsl::deleted_at.is_null())
            .select(Vehicle::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_vehicle_by_vin(&mut self, vin: &str) -> PgResult<Option<Vehicle>> {
        use schema::vehicles::{self, dsl};

        vehicles::table
            .filter(dsl::vin.eq(vin.trim().to_uppercase()))
            .filter(dsl::deleted_at.is_null())
            .select(Vehicle::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_vehicle(
        &mut self,
        vehicle_id: Uuid,
        updates: UpdateVehicle,
    ) -> PgResult<Vehicle> {
        use schema::vehicles::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(vehicles::table.filter(dsl::id.eq(vehicle_id)))
            .set((&updates, dsl::updated_at.eq(now)))
            .returning(Vehicle::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_vehicle(&mut self, vehicle_id: Uuid) -> PgResult<Option<Vehicle>> {
        use schema::vehicles::{self, dsl};

        diesel::update(vehicles::table.filter(dsl::id.eq(vehicle_id)))
            .set(dsl::deleted_at.eq(Some(jiff_diesel::Timestamp::from(Timestamp::now()))))
            .returning(Vehicle::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_vehicles(
        &mut self,
        filter: VehicleFilter,
        sort: VehicleSort,
        pagination: Pagination,
    ) -> PgResult<Vec<Vehicle>> {
        use schema::vehicles::{self, dsl};

        let query = vehicles::table
            .filter(dsl::deleted_at.is_null())
            .into_boxed();
        let mut query = apply_vehicle_filter!(query, &filter);

        query = match (sort.sort_by, sort.direction.is_ascending()) {
            (VehicleSortBy::CreatedAt, true) => query.order(dsl::created_at.asc()),
            (VehicleSortBy::CreatedAt, false) => query.order(dsl::created_at.desc()),
            (VehicleSortBy::UpdatedAt, true) => query.order(dsl::updated_at.asc()),
            (VehicleSortBy::UpdatedAt, false) => query.order(dsl::updated_at.desc()),
            (VehicleSortBy::ModelYear, true) => query.order(dsl::model_year.asc()),
            (VehicleSortBy::ModelYear, false) => query.order(dsl::model_year.desc()),
            (VehicleSortBy::PurchasedOn, true) => query.order(dsl::purchased_on.asc()),
            (VehicleSortBy::PurchasedOn, false) => query.order(dsl::purchased_on.desc()),
        };

        query
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Vehicle::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_vehicles(&mut self, filter: VehicleFilter) -> PgResult<i64> {
        use schema::vehicles::{self, dsl};

        let query = vehicles::table
            .filter(dsl::deleted_at.is_null())
            .into_boxed();
        let query = apply_vehicle_filter!(query, &filter);

        query.count().get_result(self).await.map_err(PgError::from)
    }

    async fn set_vehicle_status(
        &mut self,
        vehicle_id: Uuid,
        expected: VehicleStatus,
        next: VehicleStatus,
    ) -> PgResult<Option<Vehicle>> {
        use schema::vehicles::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(
            vehicles::table
                .filter(dsl::id.eq(vehicle_id))
                .filter(dsl::deleted_at.is_null())
                .filter(dsl::current_status.eq(expected)),
        )
        .set((dsl::current_status.eq(next), dsl::updated_at.eq(now)))
        .returning(Vehicle::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }

    async fn count_vehicles_by_status(
        &mut self,
        dealer_id: Option<Uuid>,
    ) -> PgResult<Vec<(VehicleStatus, i64)>> {
        use schema::vehicles::{self, dsl};

        let mut query = vehicles::table
            .filter(dsl::deleted_at.is_null())
            .group_by(dsl::current_status)
            .select((dsl::current_status, diesel::dsl::count_star()))
            .into_boxed();

        if let Some(dealer_id) = dealer_id {
            query = query.filter(dsl::dealer_id.eq(dealer_id));
        }

        query.load(self).await.map_err(PgError::from)
    }
}
