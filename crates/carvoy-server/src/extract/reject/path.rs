//! Enhanced path parameter extractor with improved error handling.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use super::sanitize_error_message;
use crate::handler::{Error, ErrorKind};

/// Enhanced path parameter extractor with improved error handling.
///
/// Provides clear error messages when a path parameter is missing or cannot
/// be parsed (e.g. a malformed UUID).
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new [`Path`] wrapper around the provided parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(params)) => Ok(Path(params)),
            Err(rejection) => Err(enhance_path_error(rejection)),
        }
    }
}

/// Enhances path parameter parsing errors with detailed context.
fn enhance_path_error(rejection: PathRejection) -> Error<'static> {
    tracing::debug!(
        target: "carvoy_server::extract::path",
        error = %rejection,
        "Path parameter parsing failed"
    );

    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => ErrorKind::BadRequest
            .with_message("Invalid path parameter")
            .with_context(format!(
                "Failed to parse path parameter: {}",
                sanitize_error_message(&err.to_string())
            ))
            .into_static(),
        PathRejection::MissingPathParams(err) => ErrorKind::MissingPathParam
            .with_context(sanitize_error_message(&err.to_string()))
            .into_static(),
        _ => ErrorKind::InternalServerError
            .with_message("Path parameter processing failed")
            .into_static(),
    }
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}
