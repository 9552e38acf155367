//! Multipart form extractor for file uploads.

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart as AxumMultipart, Request};
use derive_more::{Deref, DerefMut};

use crate::handler::{Error, ErrorKind};

/// Multipart form extractor with handler-compatible rejections.
#[must_use]
#[derive(Debug, Deref, DerefMut)]
pub struct Multipart(pub AxumMultipart);

impl Multipart {
    /// Converts a field read error into an HTTP error.
    pub fn field_error(err: MultipartError) -> Error<'static> {
        ErrorKind::BadRequest
            .with_message("Invalid multipart data")
            .with_context(format!("Failed to read multipart field: {}", err))
            .into_static()
    }
}

impl<S> FromRequest<S> for Multipart
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumMultipart::from_request(req, state)
            .await
            .map(Multipart)
            .map_err(|err| {
                ErrorKind::BadRequest
                    .with_message("Expected a multipart form upload")
                    .with_context(err.to_string())
                    .into_static()
            })
    }
}

impl aide::OperationInput for Multipart {
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumMultipart::operation_input(ctx, operation);
    }
}
