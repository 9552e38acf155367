//! Service layer error types.

use std::borrow::Cow;
use std::error::Error as StdError;

/// Type alias for boxed errors that are Send + Sync.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result type alias for service layer operations.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// Service layer error with structured information.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors do nothing unless handled"]
pub enum ServiceError {
    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(Cow<'static, str>),

    /// Authentication and credential errors.
    #[error("auth error: {0}")]
    Auth(Cow<'static, str>),

    /// Image decoding or encoding errors.
    #[error("image error: {0}")]
    Image(Cow<'static, str>),

    /// Document rendering errors.
    #[error("export error: {0}")]
    Export(Cow<'static, str>),

    /// Internal service logic errors.
    #[error("internal error: {0}")]
    Internal(BoxedError),
}

impl ServiceError {
    /// Creates a new configuration error.
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a new authentication error.
    #[inline]
    pub fn auth(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a new image processing error.
    #[inline]
    pub fn image(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Image(message.into())
    }

    /// Creates a new export rendering error.
    #[inline]
    pub fn export(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Export(message.into())
    }
}

impl From<carvoy_postgres::PgError> for ServiceError {
    fn from(err: carvoy_postgres::PgError) -> Self {
        Self::Internal(Box::new(err))
    }
}

impl From<carvoy_opendal::StorageError> for ServiceError {
    fn from(err: carvoy_opendal::StorageError) -> Self {
        Self::Internal(Box::new(err))
    }
}

impl From<ServiceError> for crate::handler::Error<'static> {
    fn from(err: ServiceError) -> Self {
        use crate::handler::ErrorKind;

        match err {
            ServiceError::Image(message) => {
                tracing::debug!(error = %message, "image processing failed");
                ErrorKind::BadRequest
                    .with_message("The uploaded image could not be processed")
                    .with_context(message)
                    .into_static()
            }
            err => {
                tracing::error!(error = %err, "service error");
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_variants() {
        assert!(matches!(ServiceError::config("x"), ServiceError::Config(_)));
        assert!(matches!(ServiceError::auth("x"), ServiceError::Auth(_)));
        assert!(matches!(ServiceError::image("x"), ServiceError::Image(_)));
        assert!(matches!(ServiceError::export("x"), ServiceError::Export(_)));
    }

    #[test]
    fn display_includes_message() {
        let error = ServiceError::config("missing JWT secret");
        assert!(error.to_string().contains("missing JWT secret"));
    }
}
