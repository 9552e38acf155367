//! All `axum::`[`Router`]s with related handlers.
//!
//! Every domain gets one module exposing a `routes()` function; the modules
//! are merged into a single [`ApiRouter`] here, together with the generated
//! OpenAPI document and its Scalar UI.
//!
//! Authentication is performed per-handler through the [`AuthState`]
//! extractor, which verifies the Bearer token against the database. Public
//! routes (login, health) simply don't extract it.
//!
//! [`Router`]: axum::routing::Router
//! [`AuthState`]: crate::extract::AuthState

mod authentication;
mod balance_requests;
mod dashboard;
mod dealers;
mod error;
mod exports;
mod invoices;
mod monitors;
mod notifications;
mod photos;
mod reference;
pub mod request;
pub mod response;
mod vehicles;

use std::sync::Arc;

use aide::axum::ApiRouter;
use aide::openapi::OpenApi;
use aide::scalar::Scalar;
use aide::transform::TransformOpenApi;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Returns an [`ApiRouter`] with all routes that don't require a session.
fn public_routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(authentication::public_routes())
        .merge(monitors::routes())
}

/// Returns an [`ApiRouter`] with all authenticated routes.
fn private_routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(authentication::routes())
        .merge(dealers::routes())
        .merge(vehicles::routes())
        .merge(photos::routes())
        .merge(invoices::routes())
        .merge(balance_requests::routes())
        .merge(notifications::routes())
        .merge(reference::routes())
        .merge(dashboard::routes())
        .merge(exports::routes())
}

/// Builds the complete application router with OpenAPI documentation.
pub fn routes(state: ServiceState) -> Router {
    let mut api = OpenApi::default();

    ApiRouter::new()
        .merge(public_routes())
        .merge(private_routes())
        .route("/openapi.json", get(serve_openapi))
        .route("/docs", get(Scalar::new("/openapi.json").axum_handler()))
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api)))
        .with_state(state)
}

/// Serves the generated OpenAPI document.
async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoResponse {
    axum::Json(api.as_ref().clone())
}

/// Top-level OpenAPI document metadata.
fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Carvoy API")
        .summary("Vehicle import and dealer management platform")
        .description(
            "Dealers track vehicles from auction purchase through ocean \
             shipping to a Georgian port, manage balance top-ups, and pay \
             invoices; admins manage the platform.",
        )
}
