//! Service layer: application state, configuration, and domain services.

pub mod auth;
mod config;
mod error;
pub mod export;
pub mod image;
mod state;

pub use auth::{AuthHasher, AuthKeys};
pub use config::{AuthConfig, ServiceConfig, StorageParams};
pub use error::{Result, ServiceError};
pub use export::{ExportFormat, TableDocument};
pub use image::{ImageProcessor, ProcessedVariant};
pub use state::ServiceState;
