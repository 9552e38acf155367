//! Shipping rate repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use crate::model::{NewShippingRate, ShippingRate, UpdateShippingRate};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for city-to-port shipping rates.
pub trait ShippingRateRepository {
    /// Creates a new rate for a route.
    fn create_shipping_rate(
        &mut self,
        new_rate: NewShippingRate,
    ) -> impl Future<Output = PgResult<ShippingRate>> + Send;

    /// Lists all rates.
    fn list_shipping_rates(&mut self) -> impl Future<Output = PgResult<Vec<ShippingRate>>> + Send;

    /// Looks up the rate for a specific route.
    fn find_shipping_rate(
        &mut self,
        city_id: Uuid,
        port_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<ShippingRate>>> + Send;

    /// Updates a rate.
    fn update_shipping_rate(
        &mut self,
        rate_id: Uuid,
        updates: UpdateShippingRate,
    ) -> impl Future<Output = PgResult<ShippingRate>> + Send;

    /// Deletes a rate.
    fn delete_shipping_rate(
        &mut self,
        rate_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl ShippingRateRepository for PgConnection {
    async fn create_shipping_rate(&mut self, new_rate: NewShippingRate) -> PgResult<ShippingRate> {
        use schema::shipping_rates;

        diesel::insert_into(shipping_rates::table)
            .values(&new_rate)
            .returning(ShippingRate::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_shipping_rates(&mut self) -> PgResult<Vec<ShippingRate>> {
        use schema::shipping_rates::{self, dsl};

        shipping_rates::table
            .order(dsl::updated_at.desc())
            .select(ShippingRate::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_shipping_rate(
        &mut self,
        city_id: Uuid,
        port_id: Uuid,
    ) -> PgResult<Option<ShippingRate>> {
        use schema::shipping_rates::{self, dsl};

        shipping_rates::table
            .filter(dsl::city_id.eq(city_id))
            .filter(dsl::port_id.eq(port_id))
            .select(ShippingRate::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_shipping_rate(
        &mut self,
        rate_id: Uuid,
        updates: UpdateShippingRate,
    ) -> PgResult<ShippingRate> {
        use schema::shipping_rates::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(shipping_rates::table.filter(dsl::id.eq(rate_id)))
            .set((&updates, dsl::updated_at.eq(now)))
            .returning(ShippingRate::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_shipping_rate(&mut self, rate_id: Uuid) -> PgResult<bool> {
        use schema::shipping_rates::{self, dsl};

        let deleted = diesel::delete(shipping_rates::table.filter(dsl::id.eq(rate_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
