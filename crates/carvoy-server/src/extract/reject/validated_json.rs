//! JSON extractor with automatic payload validation.

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::Json;
use crate::handler::{Error, ErrorKind};

/// JSON extractor that validates the payload after deserialization.
///
/// Combines [`Json`] with the [`Validate`] derive: extraction fails with a
/// 400 response listing the violated constraints when the payload is
/// structurally valid JSON but semantically invalid.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;

        payload.validate().map_err(|errors| {
            tracing::debug!(
                target: "carvoy_server::extract::validate",
                errors = %errors,
                "Request payload failed validation"
            );

            ErrorKind::BadRequest
                .with_message("Request validation failed")
                .with_context(errors.to_string())
                .into_static()
        })?;

        Ok(Self(payload))
    }
}

impl<T> aide::OperationInput for ValidateJson<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        axum::Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        axum::Json::<T>::inferred_early_responses(ctx, operation)
    }
}
