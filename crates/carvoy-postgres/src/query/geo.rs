//! Geography reference data repository (countries, states, cities, ports).

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{
    City, Country, NewCity, NewCountry, NewPort, NewState, Port, State, UpdateCity, UpdateCountry,
    UpdatePort, UpdateState,
};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for the geography reference tree.
///
/// All listings are alphabetical; deletion cascades down the tree via the
/// schema's foreign keys.
pub trait GeoRepository {
    /// Creates a new country.
    fn create_country(
        &mut self,
        new_country: NewCountry,
    ) -> impl Future<Output = PgResult<Country>> + Send;

    /// Lists all countries.
    fn list_countries(&mut self) -> impl Future<Output = PgResult<Vec<Country>>> + Send;

    /// Updates a country.
    fn update_country(
        &mut self,
        country_id: Uuid,
        updates: UpdateCountry,
    ) -> impl Future<Output = PgResult<Country>> + Send;

    /// Deletes a country (cascades to states, cities, and ports).
    fn delete_country(&mut self, country_id: Uuid)
    -> impl Future<Output = PgResult<bool>> + Send;

    /// Creates a new state.
    fn create_state(
        &mut self,
        new_state: NewState,
    ) -> impl Future<Output = PgResult<State>> + Send;

    /// Lists the states of a country.
    fn list_states(
        &mut self,
        country_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<State>>> + Send;

    /// Updates a state.
    fn update_state(
        &mut self,
        state_id: Uuid,
        updates: UpdateState,
    ) -> impl Future<Output = PgResult<State>> + Send;

    /// Deletes a state (cascades to cities and ports).
    fn delete_state(&mut self, state_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Creates a new city.
    fn create_city(&mut self, new_city: NewCity) -> impl Future<Output = PgResult<City>> + Send;

    /// Lists the cities of a state.
    fn list_cities(&mut self, state_id: Uuid) -> impl Future<Output = PgResult<Vec<City>>> + Send;

    /// Updates a city.
    fn update_city(
        &mut self,
        city_id: Uuid,
        updates: UpdateCity,
    ) -> impl Future<Output = PgResult<City>> + Send;

    /// Deletes a city.
    fn delete_city(&mut self, city_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Creates a new port.
    fn create_port(&mut self, new_port: NewPort) -> impl Future<Output = PgResult<Port>> + Send;

    /// Lists all ports.
    fn list_ports(&mut self) -> impl Future<Output = PgResult<Vec<Port>>> + Send;

    /// Updates a port.
    fn update_port(
        &mut self,
        port_id: Uuid,
        updates: UpdatePort,
    ) -> impl Future<Output = PgResult<Port>> + Send;

    /// Deletes a port.
    fn delete_port(&mut self, port_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;
}

impl GeoRepository for PgConnection {
    async fn create_country(&mut self, new_country: NewCountry) -> PgResult<Country> {
        use schema::countries;

        diesel::insert_into(countries::table)
            .values(&new_country)
            .returning(Country::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_countries(&mut self) -> PgResult<Vec<Country>> {
        use schema::countries::{self, dsl};

        countries::table
            .order(dsl::display_name.asc())
            .select(Country::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_country(
        &mut self,
        country_id: Uuid,
        updates: UpdateCountry,
    ) -> PgResult<Country> {
        use schema::countries::{self, dsl};

        diesel::update(countries::table.filter(dsl::id.eq(country_id)))
            .set(&updates)
            .returning(Country::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_country(&mut self, country_id: Uuid) -> PgResult<bool> {
        use schema::countries::{self, dsl};

        let deleted = diesel::delete(countries::table.filter(dsl::id.eq(country_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn create_state(&mut self, new_state: NewState) -> PgResult<State> {
        use schema::states;

        diesel::insert_into(states::table)
            .values(&new_state)
            .returning(State::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_states(&mut self, country_id: Uuid) -> PgResult<Vec<State>> {
        use schema::states::{self, dsl};

        states::table
            .filter(dsl::country_id.eq(country_id))
            .order(dsl::display_name.asc())
            .select(State::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_state(&mut self, state_id: Uuid, updates: UpdateState) -> PgResult<State> {
        use schema::states::{self, dsl};

        diesel::update(states::table.filter(dsl::id.eq(state_id)))
            .set(&updates)
            .returning(State::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_state(&mut self, state_id: Uuid) -> PgResult<bool> {
        use schema::states::{self, dsl};

        let deleted = diesel::delete(states::table.filter(dsl::id.eq(state_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn create_city(&mut self, new_city: NewCity) -> PgResult<City> {
        use schema::cities;

        diesel::insert_into(cities::table)
            .values(&new_city)
            .returning(City::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_cities(&mut self, state_id: Uuid) -> PgResult<Vec<City>> {
        use schema::cities::{self, dsl};

        cities::table
            .filter(dsl::state_id.eq(state_id))
            .order(dsl::display_name.asc())
            .select(City::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_city(&mut self, city_id: Uuid, updates: UpdateCity) -> PgResult<City> {
        use schema::cities::{self, dsl};

        diesel::update(cities::table.filter(dsl::id.eq(city_id)))
            .set(&updates)
            .returning(City::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_city(&mut self, city_id: Uuid) -> PgResult<bool> {
        use schema::cities::{self, dsl};

        let deleted = diesel::delete(cities::table.filter(dsl::id.eq(city_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn create_port(&mut self, new_port: NewPort) -> PgResult<Port> {
        use schema::ports;

        diesel::insert_into(ports::table)
            .values(&new_port)
            .returning(Port::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_ports(&mut self) -> PgResult<Vec<Port>> {
        use schema::ports::{self, dsl};

        ports::table
            .order(dsl::display_name.asc())
            .select(Port::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_port(&mut self, port_id: Uuid, updates: UpdatePort) -> PgResult<Port> {
        use schema::ports::{self, dsl};

        diesel::update(ports::table.filter(dsl::id.eq(port_id)))
            .set(&updates)
            .returning(Port::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_port(&mut self, port_id: Uuid) -> PgResult<bool> {
        use schema::ports::{self, dsl};

        let deleted = diesel::delete(ports::table.filter(dsl::id.eq(port_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
