//! Storage error to HTTP error conversion.

use carvoy_opendal::StorageError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for storage error conversion.
const TRACING_TARGET: &str = "carvoy_server::storage_errors";

impl From<StorageError> for Error<'static> {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(path) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    path = %path,
                    "stored object not found"
                );
                ErrorKind::NotFound
                    .with_message("The requested file was not found")
                    .into_static()
            }
            error => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "storage operation failed"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}
