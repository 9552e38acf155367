#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod backend;
mod config;
mod error;
mod photo_key;

pub use backend::StorageBackend;
pub use config::{FsConfig, S3Config, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use photo_key::{PhotoKey, PhotoVariant};

/// Tracing target for storage operations.
pub const TRACING_TARGET: &str = "carvoy_opendal";
