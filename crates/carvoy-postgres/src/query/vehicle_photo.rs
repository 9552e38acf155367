//! Vehicle photo repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewVehiclePhoto, VehiclePhoto};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for vehicle photo database operations.
pub trait VehiclePhotoRepository {
    /// Inserts a new photo record.
    fn create_vehicle_photo(
        &mut self,
        new_photo: NewVehiclePhoto,
    ) -> impl Future<Output = PgResult<VehiclePhoto>> + Send;

    /// Finds a photo by its unique identifier.
    fn find_vehicle_photo_by_id(
        &mut self,
        photo_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<VehiclePhoto>>> + Send;

    /// Lists all photos of a vehicle, gallery order.
    fn list_vehicle_photos(
        &mut self,
        vehicle_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<VehiclePhoto>>> + Send;

    /// Returns the next free gallery position for a vehicle.
    fn next_photo_position(
        &mut self,
        vehicle_id: Uuid,
    ) -> impl Future<Output = PgResult<i32>> + Send;

    /// Makes the given photo the vehicle's cover photo.
    ///
    /// Clears the primary flag on all sibling photos first. Returns `None`
    /// when the photo does not belong to the vehicle.
    fn set_primary_photo(
        &mut self,
        vehicle_id: Uuid,
        photo_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<VehiclePhoto>>> + Send;

    /// Permanently deletes a photo record.
    ///
    /// Returns the deleted row so the caller can remove the stored objects.
    fn delete_vehicle_photo(
        &mut self,
        photo_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<VehiclePhoto>>> + Send;
}

impl VehiclePhotoRepository for PgConnection {
    async fn create_vehicle_photo(&mut self, new_photo: NewVehiclePhoto) -> PgResult<VehiclePhoto> {
        use schema::vehicle_photos;

        diesel::insert_into(vehicle_photos::table)
            .values(&new_photo)
            .returning(VehiclePhoto::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_vehicle_photo_by_id(
        &mut self,
        photo_id: Uuid,
    ) -> PgResult<Option<VehiclePhoto>> {
        use schema::vehicle_photos::{self, dsl};

        vehicle_photos::table
            .filter(dsl::id.eq(photo_id))
            .select(VehiclePhoto::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_vehicle_photos(&mut self, vehicle_id: Uuid) -> PgResult<Vec<VehiclePhoto>> {
        use schema::vehicle_photos::{self, dsl};

        vehicle_photos::table
            .filter(dsl::vehicle_id.eq(vehicle_id))
            .order((dsl::position.asc(), dsl::created_at.asc()))
            .select(VehiclePhoto::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn next_photo_position(&mut self, vehicle_id: Uuid) -> PgResult<i32> {
        use schema::vehicle_photos::{self, dsl};

        let max: Option<i32> = vehicle_photos::table
            .filter(dsl::vehicle_id.eq(vehicle_id))
            .select(diesel::dsl::max(dsl::position))
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(max.map_or(0, |p| p + 1))
    }

    async fn set_primary_photo(
        &mut self,
        vehicle_id: Uuid,
        photo_id: Uuid,
    ) -> PgResult<Option<VehiclePhoto>> {
        use schema::vehicle_photos::{self, dsl};

        diesel::update(vehicle_photos::table.filter(dsl::vehicle_id.eq(vehicle_id)))
            .set(dsl::is_primary.eq(false))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        diesel::update(
            vehicle_photos::table
                .filter(dsl::id.eq(photo_id))
                .filter(dsl::vehicle_id.eq(vehicle_id)),
        )
        .set(dsl::is_primary.eq(true))
        .returning(VehiclePhoto::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }

    async fn delete_vehicle_photo(&mut self, photo_id: Uuid) -> PgResult<Option<VehiclePhoto>> {
        use schema::vehicle_photos::{self, dsl};

        diesel::delete(vehicle_photos::table.filter(dsl::id.eq(photo_id)))
            .returning(VehiclePhoto::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
