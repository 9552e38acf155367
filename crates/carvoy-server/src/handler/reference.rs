//! Reference data handlers: geography, catalog, and shipping rates.
//!
//! Reads are available to any authenticated account (the UI needs them for
//! dropdowns); mutations are admin-only.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::PgClient;
use carvoy_postgres::model::{
    NewAuction, NewCity, NewCountry, NewMake, NewPort, NewShippingRate, NewState, NewVehicleModel,
    UpdateAuction, UpdateCity, UpdateCountry, UpdateMake, UpdatePort, UpdateShippingRate,
    UpdateState, UpdateVehicleModel,
};
use carvoy_postgres::query::{CatalogRepository, GeoRepository, ShippingRateRepository};

use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::request::{
    AuctionPathParams, CityPathParams, CountryPathParams, CreateAuctionRequest, CreateCityRequest,
    CreateCountryRequest, CreateMakeRequest, CreateModelRequest, CreatePortRequest,
    CreateShippingRateRequest, CreateStateRequest, MakePathParams, ModelPathParams,
    PortPathParams, RatePathParams, StatePathParams, UpdateNameRequest,
    UpdateShippingRateRequest,
};
use crate::handler::response::{
    AuctionItem, CityItem, CountryItem, ErrorResponse, MakeItem, ModelItem, PortItem,
    ShippingRateItem, StateItem,
};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for reference data operations.
const TRACING_TARGET: &str = "carvoy_server::handler::reference";

// Geography: countries

async fn list_countries(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
) -> Result<(StatusCode, Json<Vec<CountryItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let countries = conn.list_countries().await?;
    Ok((
        StatusCode::OK,
        Json(countries.into_iter().map(Into::into).collect()),
    ))
}

fn list_countries_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List countries")
        .response::<200, Json<Vec<CountryItem>>>()
}

async fn create_country(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateCountryRequest>,
) -> Result<(StatusCode, Json<CountryItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let country = conn
        .create_country(NewCountry {
            display_name: request.name,
            iso_code: request.iso_code.to_uppercase(),
        })
        .await?;

    tracing::info!(target: TRACING_TARGET, country_id = %country.id, "country created");
    Ok((StatusCode::CREATED, Json(country.into())))
}

fn create_country_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create country")
        .response::<201, Json<CountryItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_country(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<CountryPathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<CountryItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let country = conn
        .update_country(
            path_params.country_id,
            UpdateCountry {
                display_name: Some(request.name),
                iso_code: None,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(country.into())))
}

fn update_country_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename country")
        .response::<200, Json<CountryItem>>()
}

async fn delete_country(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<CountryPathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_country(path_params.country_id).await? {
        return Err(not_found("country"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_country_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete country")
        .description("Deletes a country and everything beneath it in the tree.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

// Geography: states

async fn list_states(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
    Path(path_params): Path<CountryPathParams>,
) -> Result<(StatusCode, Json<Vec<StateItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let states = conn.list_states(path_params.country_id).await?;
    Ok((
        StatusCode::OK,
        Json(states.into_iter().map(Into::into).collect()),
    ))
}

fn list_states_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List states of a country")
        .response::<200, Json<Vec<StateItem>>>()
}

async fn create_state(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateStateRequest>,
) -> Result<(StatusCode, Json<StateItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let state = conn
        .create_state(NewState {
            country_id: request.country_id,
            display_name: request.name,
            state_code: request.code,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(state.into())))
}

fn create_state_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create state")
        .response::<201, Json<StateItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_state(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<StatePathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<StateItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let state = conn
        .update_state(
            path_params.state_id,
            UpdateState {
                display_name: Some(request.name),
                state_code: None,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(state.into())))
}

fn update_state_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename state").response::<200, Json<StateItem>>()
}

async fn delete_state(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<StatePathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_state(path_params.state_id).await? {
        return Err(not_found("state"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_state_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete state")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

// Geography: cities

async fn list_cities(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
    Path(path_params): Path<StatePathParams>,
) -> Result<(StatusCode, Json<Vec<CityItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let cities = conn.list_cities(path_params.state_id).await?;
    Ok((
        StatusCode::OK,
        Json(cities.into_iter().map(Into::into).collect()),
    ))
}

fn list_cities_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List cities of a state")
        .response::<200, Json<Vec<CityItem>>>()
}

async fn create_city(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateCityRequest>,
) -> Result<(StatusCode, Json<CityItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let city = conn
        .create_city(NewCity {
            state_id: request.state_id,
            display_name: request.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(city.into())))
}

fn create_city_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create city")
        .response::<201, Json<CityItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_city(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<CityPathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<CityItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let city = conn
        .update_city(
            path_params.city_id,
            UpdateCity {
                display_name: Some(request.name),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(city.into())))
}

fn update_city_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename city").response::<200, Json<CityItem>>()
}

async fn delete_city(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<CityPathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_city(path_params.city_id).await? {
        return Err(not_found("city"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_city_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete city")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

// Geography: ports

async fn list_ports(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
) -> Result<(StatusCode, Json<Vec<PortItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let ports = conn.list_ports().await?;
    Ok((
        StatusCode::OK,
        Json(ports.into_iter().map(Into::into).collect()),
    ))
}

fn list_ports_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List ports").response::<200, Json<Vec<PortItem>>>()
}

async fn create_port(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreatePortRequest>,
) -> Result<(StatusCode, Json<PortItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let port = conn
        .create_port(NewPort {
            state_id: request.state_id,
            display_name: request.name,
            port_code: request.code.to_uppercase(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(port.into())))
}

fn create_port_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create port")
        .response::<201, Json<PortItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_port(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<PortPathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<PortItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let port = conn
        .update_port(
            path_params.port_id,
            UpdatePort {
                display_name: Some(request.name),
                port_code: None,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(port.into())))
}

fn update_port_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename port").response::<200, Json<PortItem>>()
}

async fn delete_port(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<PortPathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_port(path_params.port_id).await? {
        return Err(not_found("port"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_port_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete port")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

// Catalog: auctions

async fn list_auctions(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
) -> Result<(StatusCode, Json<Vec<AuctionItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let auctions = conn.list_auctions().await?;
    Ok((
        StatusCode::OK,
        Json(auctions.into_iter().map(Into::into).collect()),
    ))
}

fn list_auctions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List auctions")
        .response::<200, Json<Vec<AuctionItem>>>()
}

async fn create_auction(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateAuctionRequest>,
) -> Result<(StatusCode, Json<AuctionItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let auction = conn
        .create_auction(NewAuction {
            display_name: request.name,
            city_id: request.city_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(auction.into())))
}

fn create_auction_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create auction")
        .response::<201, Json<AuctionItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_auction(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<AuctionPathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<AuctionItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let auction = conn
        .update_auction(
            path_params.auction_id,
            UpdateAuction {
                display_name: Some(request.name),
                city_id: None,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(auction.into())))
}

fn update_auction_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename auction")
        .response::<200, Json<AuctionItem>>()
}

async fn delete_auction(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<AuctionPathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_auction(path_params.auction_id).await? {
        return Err(not_found("auction"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_auction_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete auction")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

// Catalog: makes and models

async fn list_makes(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
) -> Result<(StatusCode, Json<Vec<MakeItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let makes = conn.list_makes().await?;
    Ok((
        StatusCode::OK,
        Json(makes.into_iter().map(Into::into).collect()),
    ))
}

fn list_makes_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List makes").response::<200, Json<Vec<MakeItem>>>()
}

async fn create_make(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateMakeRequest>,
) -> Result<(StatusCode, Json<MakeItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let make = conn
        .create_make(NewMake {
            display_name: request.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(make.into())))
}

fn create_make_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create make")
        .response::<201, Json<MakeItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_make(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<MakePathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<MakeItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let make = conn
        .update_make(
            path_params.make_id,
            UpdateMake {
                display_name: Some(request.name),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(make.into())))
}

fn update_make_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename make").response::<200, Json<MakeItem>>()
}

async fn delete_make(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<MakePathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_make(path_params.make_id).await? {
        return Err(not_found("make"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_make_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete make")
        .description("Deletes a make and its models.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

async fn list_models(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
    Path(path_params): Path<MakePathParams>,
) -> Result<(StatusCode, Json<Vec<ModelItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let models = conn.list_vehicle_models(path_params.make_id).await?;
    Ok((
        StatusCode::OK,
        Json(models.into_iter().map(Into::into).collect()),
    ))
}

fn list_models_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List models of a make")
        .response::<200, Json<Vec<ModelItem>>>()
}

async fn create_model(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateModelRequest>,
) -> Result<(StatusCode, Json<ModelItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let model = conn
        .create_vehicle_model(NewVehicleModel {
            make_id: request.make_id,
            display_name: request.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(model.into())))
}

fn create_model_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create model")
        .response::<201, Json<ModelItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_model(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<ModelPathParams>,
    ValidateJson(request): ValidateJson<UpdateNameRequest>,
) -> Result<(StatusCode, Json<ModelItem>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    let model = conn
        .update_vehicle_model(
            path_params.model_id,
            UpdateVehicleModel {
                display_name: Some(request.name),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(model.into())))
}

fn update_model_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename model").response::<200, Json<ModelItem>>()
}

async fn delete_model(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<ModelPathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_vehicle_model(path_params.model_id).await? {
        return Err(not_found("model"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_model_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete model")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

// Shipping rates

async fn list_shipping_rates(
    State(pg_client): State<PgClient>,
    AuthState(_auth_state): AuthState,
) -> Result<(StatusCode, Json<Vec<ShippingRateItem>>)> {
    let mut conn = pg_client.get_connection().await?;
    let rates = conn.list_shipping_rates().await?;
    Ok((
        StatusCode::OK,
        Json(rates.into_iter().map(Into::into).collect()),
    ))
}

fn list_shipping_rates_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List shipping rates")
        .response::<200, Json<Vec<ShippingRateItem>>>()
}

async fn create_shipping_rate(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateShippingRateRequest>,
) -> Result<(StatusCode, Json<ShippingRateItem>)> {
    auth_state.authorize_admin()?;

    if request.amount <= bigdecimal::BigDecimal::from(0) {
        return Err(ErrorKind::BadRequest
            .with_message("The shipping rate must be positive")
            .into_static());
    }

    let mut conn = pg_client.get_connection().await?;
    let rate = conn
        .create_shipping_rate(NewShippingRate {
            city_id: request.city_id,
            port_id: request.port_id,
            amount: request.amount,
        })
        .await?;

    tracing::info!(target: TRACING_TARGET, rate_id = %rate.id, "shipping rate created");
    Ok((StatusCode::CREATED, Json(rate.into())))
}

fn create_shipping_rate_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create shipping rate")
        .description("Sets the transport price for a city-to-port route.")
        .response::<201, Json<ShippingRateItem>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

async fn update_shipping_rate(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<RatePathParams>,
    ValidateJson(request): ValidateJson<UpdateShippingRateRequest>,
) -> Result<(StatusCode, Json<ShippingRateItem>)> {
    auth_state.authorize_admin()?;

    if request.amount <= bigdecimal::BigDecimal::from(0) {
        return Err(ErrorKind::BadRequest
            .with_message("The shipping rate must be positive")
            .into_static());
    }

    let mut conn = pg_client.get_connection().await?;
    let rate = conn
        .update_shipping_rate(
            path_params.rate_id,
            UpdateShippingRate {
                amount: Some(request.amount),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(rate.into())))
}

fn update_shipping_rate_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update shipping rate")
        .response::<200, Json<ShippingRateItem>>()
}

async fn delete_shipping_rate(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<RatePathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_shipping_rate(path_params.rate_id).await? {
        return Err(not_found("shipping_rate"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn delete_shipping_rate_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete shipping rate")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

fn not_found(resource: &'static str) -> crate::handler::Error<'static> {
    ErrorKind::NotFound.with_resource(resource).into_static()
}

/// Returns routes for reference data management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/geo/countries",
            get_with(list_countries, list_countries_docs)
                .post_with(create_country, create_country_docs),
        )
        .api_route(
            "/geo/countries/{countryId}",
            patch_with(update_country, update_country_docs)
                .delete_with(delete_country, delete_country_docs),
        )
        .api_route(
            "/geo/countries/{countryId}/states",
            get_with(list_states, list_states_docs),
        )
        .api_route("/geo/states", post_with(create_state, create_state_docs))
        .api_route(
            "/geo/states/{stateId}",
            patch_with(update_state, update_state_docs).delete_with(delete_state, delete_state_docs),
        )
        .api_route(
            "/geo/states/{stateId}/cities",
            get_with(list_cities, list_cities_docs),
        )
        .api_route("/geo/cities", post_with(create_city, create_city_docs))
        .api_route(
            "/geo/cities/{cityId}",
            patch_with(update_city, update_city_docs).delete_with(delete_city, delete_city_docs),
        )
        .api_route(
            "/geo/ports",
            get_with(list_ports, list_ports_docs).post_with(create_port, create_port_docs),
        )
        .api_route(
            "/geo/ports/{portId}",
            patch_with(update_port, update_port_docs).delete_with(delete_port, delete_port_docs),
        )
        .api_route(
            "/catalog/auctions",
            get_with(list_auctions, list_auctions_docs)
                .post_with(create_auction, create_auction_docs),
        )
        .api_route(
            "/catalog/auctions/{auctionId}",
            patch_with(update_auction, update_auction_docs)
                .delete_with(delete_auction, delete_auction_docs),
        )
        .api_route(
            "/catalog/makes",
            get_with(list_makes, list_makes_docs).post_with(create_make, create_make_docs),
        )
        .api_route(
            "/catalog/makes/{makeId}",
            patch_with(update_make, update_make_docs).delete_with(delete_make, delete_make_docs),
        )
        .api_route(
            "/catalog/makes/{makeId}/models",
            get_with(list_models, list_models_docs),
        )
        .api_route("/catalog/models", post_with(create_model, create_model_docs))
        .api_route(
            "/catalog/models/{modelId}",
            patch_with(update_model, update_model_docs)
                .delete_with(delete_model, delete_model_docs),
        )
        .api_route(
            "/shipping-rates",
            get_with(list_shipping_rates, list_shipping_rates_docs)
                .post_with(create_shipping_rate, create_shipping_rate_docs),
        )
        .api_route(
            "/shipping-rates/{rateId}",
            patch_with(update_shipping_rate, update_shipping_rate_docs)
                .delete_with(delete_shipping_rate, delete_shipping_rate_docs),
        )
        .with_path_items(|item| item.tag("Reference"))
}
