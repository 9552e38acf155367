//! Vehicle catalog repository (auctions, makes, models).

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{
    Auction, Make, NewAuction, NewMake, NewVehicleModel, UpdateAuction, UpdateMake,
    UpdateVehicleModel, VehicleModel,
};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for the vehicle catalog reference data.
pub trait CatalogRepository {
    /// Creates a new auction.
    fn create_auction(
        &mut self,
        new_auction: NewAuction,
    ) -> impl Future<Output = PgResult<Auction>> + Send;

    /// Lists all auctions.
    fn list_auctions(&mut self) -> impl Future<Output = PgResult<Vec<Auction>>> + Send;

    /// Updates an auction.
    fn update_auction(
        &mut self,
        auction_id: Uuid,
        updates: UpdateAuction,
    ) -> impl Future<Output = PgResult<Auction>> + Send;

    /// Deletes an auction.
    fn delete_auction(&mut self, auction_id: Uuid)
    -> impl Future<Output = PgResult<bool>> + Send;

    /// Creates a new make.
    fn create_make(&mut self, new_make: NewMake) -> impl Future<Output = PgResult<Make>> + Send;

    /// Lists all makes.
    fn list_makes(&mut self) -> impl Future<Output = PgResult<Vec<Make>>> + Send;

    /// Updates a make.
    fn update_make(
        &mut self,
        make_id: Uuid,
        updates: UpdateMake,
    ) -> impl Future<Output = PgResult<Make>> + Send;

    /// Deletes a make (cascades to its models).
    fn delete_make(&mut self, make_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Creates a new model under a make.
    fn create_vehicle_model(
        &mut self,
        new_model: NewVehicleModel,
    ) -> impl Future<Output = PgResult<VehicleModel>> + Send;

    /// Finds a model by its unique identifier.
    fn find_vehicle_model_by_id(
        &mut self,
        model_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<VehicleModel>>> + Send;

    /// Lists the models of a make.
    fn list_vehicle_models(
        &mut self,
        make_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<VehicleModel>>> + Send;

    /// Updates a model.
    fn update_vehicle_model(
        &mut self,
        model_id: Uuid,
        updates: UpdateVehicleModel,
    ) -> impl Future<Output = PgResult<VehicleModel>> + Send;

    /// Deletes a model.
    fn delete_vehicle_model(
        &mut self,
        model_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl CatalogRepository for PgConnection {
    async fn create_auction(&mut self, new_auction: NewAuction) -> PgResult<Auction> {
        use schema::auctions;

        diesel::insert_into(auctions::table)
            .values(&new_auction)
            .returning(Auction::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_auctions(&mut self) -> PgResult<Vec<Auction>> {
        use schema::auctions::{self, dsl};

        auctions::table
            .order(dsl::display_name.asc())
            .select(Auction::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_auction(
        &mut self,
        auction_id: Uuid,
        updates: UpdateAuction,
    ) -> PgResult<Auction> {
        use schema::auctions::{self, dsl};

        diesel::update(auctions::table.filter(dsl::id.eq(auction_id)))
            .set(&updates)
            .returning(Auction::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_auction(&mut self, auction_id: Uuid) -> PgResult<bool> {
        use schema::auctions::{self, dsl};

        let deleted = diesel::delete(auctions::table.filter(dsl::id.eq(auction_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn create_make(&mut self, new_make: NewMake) -> PgResult<Make> {
        use schema::makes;

        diesel::insert_into(makes::table)
            .values(&new_make)
            .returning(Make::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_makes(&mut self) -> PgResult<Vec<Make>> {
        use schema::makes::{self, dsl};

        makes::table
            .order(dsl::display_name.asc())
            .select(Make::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_make(&mut self, make_id: Uuid, updates: UpdateMake) -> PgResult<Make> {
        use schema::makes::{self, dsl};

        diesel::update(makes::table.filter(dsl::id.eq(make_id)))
            .set(&updates)
            .returning(Make::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_make(&mut self, make_id: Uuid) -> PgResult<bool> {
        use schema::makes::{self, dsl};

        let deleted = diesel::delete(makes::table.filter(dsl::id.eq(make_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn create_vehicle_model(
        &mut self,
        new_model: NewVehicleModel,
    ) -> PgResult<VehicleModel> {
        use schema::vehicle_models;

        diesel::insert_into(vehicle_models::table)
            .values(&new_model)
            .returning(VehicleModel::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_vehicle_model_by_id(
        &mut self,
        model_id: Uuid,
    ) -> PgResult<Option<VehicleModel>> {
        use schema::vehicle_models::{self, dsl};

        vehicle_models::table
            .filter(dsl::id.eq(model_id))
            .select(VehicleModel::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_vehicle_models(&mut self, make_id: Uuid) -> PgResult<Vec<VehicleModel>> {
        use schema::vehicle_models::{self, dsl};

        vehicle_models::table
            .filter(dsl::make_id.eq(make_id))
            .order(dsl::display_name.asc())
            .select(VehicleModel::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_vehicle_model(
        &mut self,
        model_id: Uuid,
        updates: UpdateVehicleModel,
    ) -> PgResult<VehicleModel> {
        use schema::vehicle_models::{self, dsl};

        diesel::update(vehicle_models::table.filter(dsl::id.eq(model_id)))
            .set(&updates)
            .returning(VehicleModel::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_vehicle_model(&mut self, model_id: Uuid) -> PgResult<bool> {
        use schema::vehicle_models::{self, dsl};

        let deleted = diesel::delete(vehicle_models::table.filter(dsl::id.eq(model_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
