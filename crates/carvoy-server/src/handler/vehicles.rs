//! Vehicle management handlers.
//!
//! Admins manage the whole fleet; dealers see their own vehicles. Lifecycle
//! changes run inside one transaction that updates the row, appends the
//! status event, and notifies the owning dealer.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use carvoy_postgres::model::{
    NewAccountNotification, NewVehicle, NewVehicleStatusEvent, UpdateVehicle,
};
use carvoy_postgres::query::{
    AccountRepository, AccountNotificationRepository, ShippingRateRepository, VehicleRepository,
    VehicleStatusEventRepository,
};
use carvoy_postgres::scoped_futures::ScopedFutureExt;
use carvoy_postgres::PgClient;
use carvoy_postgres::types::NotificationEvent;

use crate::extract::{AuthState, Json, Path, Query, ValidateJson};
use crate::handler::request::{
    ChangeVehicleStatusRequest, CreateVehicleRequest, UpdateVehicleRequest, VehicleListParams,
    VehiclePathParams,
};
use crate::handler::response::{ErrorResponse, StatusEventView, VehicleView};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for vehicle operations.
const TRACING_TARGET: &str = "carvoy_server::handler::vehicles";

/// Lists vehicles; dealers are scoped to their own fleet.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn list_vehicles(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Query(params): Query<VehicleListParams>,
) -> Result<(StatusCode, Json<Vec<VehicleView>>)> {
    let mut filter = params.filter();

    // Dealers only ever see their own vehicles, regardless of the filter.
    if !auth_state.is_admin() {
        filter.dealer_id = Some(auth_state.account_id);
    }

    let mut conn = pg_client.get_connection().await?;

    let vehicles = conn
        .list_vehicles(filter, params.sort(), params.pagination().into())
        .await?;

    let response = vehicles.into_iter().map(VehicleView::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

fn list_vehicles_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List vehicles")
        .description("Lists vehicles with filtering and sorting; dealers see only their own.")
        .response::<200, Json<Vec<VehicleView>>>()
        .response::<401, Json<ErrorResponse<'static>>>()
}

/// Registers a new vehicle for a dealer.
#[tracing::instrument(skip_all, fields(account_id = %auth_state.account_id))]
async fn create_vehicle(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    ValidateJson(request): ValidateJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;

    // The dealer must exist and actually be a dealer account.
    let dealer = conn
        .find_account_by_id(request.dealer_id)
        .await?
        .filter(|account| account.is_dealer())
        .ok_or_else(|| {
            ErrorKind::BadRequest
                .with_message("The selected dealer does not exist")
                .with_resource("dealer")
                .into_static()
        })?;

    // Friendlier than surfacing the unique-constraint violation.
    if let Some(existing) = conn.find_vehicle_by_vin(&request.vin).await? {
        return Err(ErrorKind::Conflict
            .with_message("A vehicle with this VIN is already registered")
            .with_context(format!("vehicle {}", existing.id))
            .into_static());
    }

    // Without an explicit transport price the route rate applies.
    let mut request = request;
    if request.transport_price.is_none()
        && let (Some(city_id), Some(port_id)) = (request.city_id, request.port_id)
    {
        request.transport_price = conn
            .find_shipping_rate(city_id, port_id)
            .await?
            .map(|rate| rate.amount);
    }

    let vehicle = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                let vehicle = conn
                    .create_vehicle(NewVehicle {
                        dealer_id: request.dealer_id,
                        make_id: request.make_id,
                        model_id: request.model_id,
                        auction_id: request.auction_id,
                        city_id: request.city_id,
                        port_id: request.port_id,
                        vin: request.vin,
                        model_year: request.model_year,
                        exterior_color: request.exterior_color,
                        lot_number: request.lot_number,
                        purchase_price: request.purchase_price,
                        purchased_on: request.purchased_on.map(Into::into),
                        transport_price: request.transport_price,
                        notes: request.notes,
                    })
                    .await
                    .map_err(Error::from)?;

                // Initial lifecycle event.
                conn.create_status_event(NewVehicleStatusEvent {
                    vehicle_id: vehicle.id,
                    previous_status: None,
                    new_status: vehicle.current_status,
                    changed_by: auth_state.account_id,
                    note: None,
                })
                .await
                .map_err(Error::from)?;

                Ok(vehicle)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        vehicle_id = %vehicle.id,
        dealer_id = %dealer.id,
        vin = %vehicle.vin,
        "vehicle registered"
    );

    Ok((StatusCode::CREATED, Json(vehicle.into())))
}

fn create_vehicle_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Register vehicle")
        .description("Registers a vehicle purchased at auction for a dealer.")
        .response::<201, Json<VehicleView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Returns a single vehicle.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn get_vehicle(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
) -> Result<(StatusCode, Json<VehicleView>)> {
    let mut conn = pg_client.get_connection().await?;

    let vehicle = find_vehicle(&mut conn, path_params.vehicle_id).await?;
    auth_state.authorize_admin_or_owner(vehicle.dealer_id)?;

    Ok((StatusCode::OK, Json(vehicle.into())))
}

fn get_vehicle_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get vehicle")
        .response::<200, Json<VehicleView>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Updates a vehicle's details.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn update_vehicle(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
    ValidateJson(request): ValidateJson<UpdateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_vehicle(&mut conn, path_params.vehicle_id).await?;

    let vehicle = conn
        .update_vehicle(
            path_params.vehicle_id,
            UpdateVehicle {
                make_id: request.make_id,
                model_id: request.model_id,
                auction_id: request.auction_id.map(Some),
                city_id: request.city_id.map(Some),
                port_id: request.port_id.map(Some),
                exterior_color: request.exterior_color.map(Some),
                lot_number: request.lot_number.map(Some),
                purchase_price: request.purchase_price.map(Some),
                purchased_on: request.purchased_on.map(|d| Some(d.into())),
                container_number: request.container_number.map(Some),
                estimated_arrival_on: request.estimated_arrival_on.map(|d| Some(d.into())),
                transport_price: request.transport_price.map(Some),
                notes: request.notes.map(Some),
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into())))
}

fn update_vehicle_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update vehicle")
        .response::<200, Json<VehicleView>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Soft deletes a vehicle.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn delete_vehicle(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
) -> Result<StatusCode> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;
    find_vehicle(&mut conn, path_params.vehicle_id).await?;

    conn.delete_vehicle(path_params.vehicle_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        vehicle_id = %path_params.vehicle_id,
        deleted_by = %auth_state.account_id,
        "vehicle deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn delete_vehicle_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete vehicle")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Moves a vehicle to a new lifecycle status.
///
/// Runs a single transaction: guarded status update, status event append,
/// and a notification for the owning dealer.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn change_vehicle_status(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
    ValidateJson(request): ValidateJson<ChangeVehicleStatusRequest>,
) -> Result<(StatusCode, Json<VehicleView>)> {
    auth_state.authorize_admin()?;

    let mut conn = pg_client.get_connection().await?;

    let vehicle = find_vehicle(&mut conn, path_params.vehicle_id).await?;
    let previous_status = vehicle.current_status;

    if !vehicle.can_transition_to(request.status) {
        return Err(ErrorKind::Conflict
            .with_message("This status change is not allowed")
            .with_context(format!(
                "cannot move from '{}' to '{}'",
                previous_status, request.status
            ))
            .into_static());
    }

    let changed_by = auth_state.account_id;
    let next_status = request.status;
    let note = request.note;

    let updated = conn
        .transaction::<_, Error<'static>, _>(|conn| {
            async move {
                // Guarded on the expected current status so a concurrent
                // transition cannot double-apply.
                let updated = conn
                    .set_vehicle_status(vehicle.id, previous_status, next_status)
                    .await
                    .map_err(Error::from)?
                    .ok_or_else(|| {
                        ErrorKind::Conflict
                            .with_message("The vehicle status changed concurrently")
                            .into_static()
                    })?;

                conn.create_status_event(NewVehicleStatusEvent {
                    vehicle_id: updated.id,
                    previous_status: Some(previous_status),
                    new_status: next_status,
                    changed_by,
                    note: note.clone(),
                })
                .await
                .map_err(Error::from)?;

                conn.create_notification(NewAccountNotification {
                    account_id: updated.dealer_id,
                    event: NotificationEvent::VehicleStatusChanged,
                    title: "Vehicle status updated".to_string(),
                    message: format!(
                        "Vehicle {} moved from '{}' to '{}'",
                        updated.vin, previous_status, next_status
                    ),
                    related_id: Some(updated.id),
                })
                .await
                .map_err(Error::from)?;

                Ok(updated)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        vehicle_id = %updated.id,
        previous_status = %previous_status,
        new_status = %updated.current_status,
        changed_by = %auth_state.account_id,
        "vehicle status changed"
    );

    Ok((StatusCode::OK, Json(updated.into())))
}

fn change_vehicle_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Change vehicle status")
        .description(
            "Moves the vehicle forward in its lifecycle, records the event, \
             and notifies the owning dealer.",
        )
        .response::<200, Json<VehicleView>>()
        .response::<409, Json<ErrorResponse<'static>>>()
}

/// Returns the lifecycle history of a vehicle.
#[tracing::instrument(skip_all, fields(vehicle_id = %path_params.vehicle_id))]
async fn get_vehicle_history(
    State(pg_client): State<PgClient>,
    AuthState(auth_state): AuthState,
    Path(path_params): Path<VehiclePathParams>,
) -> Result<(StatusCode, Json<Vec<StatusEventView>>)> {
    let mut conn = pg_client.get_connection().await?;

    let vehicle = find_vehicle(&mut conn, path_params.vehicle_id).await?;
    auth_state.authorize_admin_or_owner(vehicle.dealer_id)?;

    let events = conn.list_status_events(vehicle.id).await?;
    let response = events.into_iter().map(StatusEventView::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

fn get_vehicle_history_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Vehicle history")
        .description("Returns the append-only lifecycle event log, oldest first.")
        .response::<200, Json<Vec<StatusEventView>>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Loads a vehicle or reports 404.
pub(super) async fn find_vehicle(
    conn: &mut carvoy_postgres::PgConn,
    vehicle_id: uuid::Uuid,
) -> Result<carvoy_postgres::model::Vehicle> {
    let vehicle = conn
        .find_vehicle_by_id(vehicle_id)
        .await?
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Vehicle not found")
                .with_resource("vehicle")
                .into_static()
        })?;

    Ok(vehicle)
}

/// Returns routes for vehicle management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/vehicles",
            get_with(list_vehicles, list_vehicles_docs)
                .post_with(create_vehicle, create_vehicle_docs),
        )
        .api_route(
            "/vehicles/{vehicleId}",
            get_with(get_vehicle, get_vehicle_docs)
                .patch_with(update_vehicle, update_vehicle_docs)
                .delete_with(delete_vehicle, delete_vehicle_docs),
        )
        .api_route(
            "/vehicles/{vehicleId}/status",
            post_with(change_vehicle_status, change_vehicle_status_docs),
        )
        .api_route(
            "/vehicles/{vehicleId}/history",
            get_with(get_vehicle_history, get_vehicle_history_docs),
        )
        .with_path_items(|item| item.tag("Vehicles"))
}
