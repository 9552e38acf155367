//! Service configuration and external-service construction.

#[cfg(feature = "config")]
use clap::Args;
use carvoy_opendal::{FsConfig, S3Config, StorageBackend, StorageConfig};
use carvoy_postgres::{PgClient, PgConfig};
use jiff::Span;
use serde::{Deserialize, Serialize};

use crate::service::{AuthHasher, AuthKeys, Result, ServiceError};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct AuthConfig {
    /// Shared secret used to sign authentication tokens (min. 32 bytes).
    #[cfg_attr(feature = "config", arg(long = "jwt-secret", env = "JWT_SECRET"))]
    pub jwt_secret: String,

    /// Token time-to-live in hours.
    #[cfg_attr(
        feature = "config",
        arg(long = "token-ttl-hours", env = "TOKEN_TTL_HOURS", default_value = "12")
    )]
    pub token_ttl_hours: i64,
}

/// Object storage configuration parameters.
///
/// Chooses between the S3 backend (production) and the filesystem backend
/// (development) based on `storage_backend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct StorageParams {
    /// Storage backend to use: `s3` or `fs`.
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-backend", env = "STORAGE_BACKEND", default_value = "fs")
    )]
    pub storage_backend: String,

    /// Root directory for the filesystem backend.
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-fs-root", env = "STORAGE_FS_ROOT", default_value = "./data/storage")
    )]
    pub fs_root: String,

    /// Bucket name for the S3 backend.
    #[cfg_attr(feature = "config", arg(long = "storage-s3-bucket", env = "STORAGE_S3_BUCKET"))]
    pub s3_bucket: Option<String>,

    /// Region for the S3 backend.
    #[cfg_attr(feature = "config", arg(long = "storage-s3-region", env = "STORAGE_S3_REGION"))]
    pub s3_region: Option<String>,

    /// Custom endpoint for S3-compatible storage (MinIO, R2).
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-s3-endpoint", env = "STORAGE_S3_ENDPOINT")
    )]
    pub s3_endpoint: Option<String>,

    /// Access key ID for the S3 backend.
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-s3-access-key-id", env = "STORAGE_S3_ACCESS_KEY_ID")
    )]
    pub s3_access_key_id: Option<String>,

    /// Secret access key for the S3 backend.
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-s3-secret-access-key", env = "STORAGE_S3_SECRET_ACCESS_KEY")
    )]
    pub s3_secret_access_key: Option<String>,

    /// Public base URL for unauthenticated reads (CDN or public bucket).
    #[cfg_attr(
        feature = "config",
        arg(long = "storage-s3-public-url", env = "STORAGE_S3_PUBLIC_URL")
    )]
    pub s3_public_url: Option<String>,
}

impl StorageParams {
    /// Builds the typed storage configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the backend name is unknown or the
    /// S3 backend is selected without a bucket/region.
    pub fn storage_config(&self) -> Result<StorageConfig> {
        match self.storage_backend.as_str() {
            "fs" => Ok(StorageConfig::Fs(FsConfig::new(&self.fs_root))),
            "s3" => {
                let bucket = self.s3_bucket.as_deref().ok_or_else(|| {
                    ServiceError::config("storage backend 's3' requires --storage-s3-bucket")
                })?;
                let region = self.s3_region.as_deref().ok_or_else(|| {
                    ServiceError::config("storage backend 's3' requires --storage-s3-region")
                })?;

                let mut config = S3Config::new(bucket, region);
                if let Some(ref endpoint) = self.s3_endpoint {
                    config = config.with_endpoint(endpoint);
                }
                if let (Some(key), Some(secret)) =
                    (&self.s3_access_key_id, &self.s3_secret_access_key)
                {
                    config = config.with_credentials(key, secret);
                }
                if let Some(ref public_url) = self.s3_public_url {
                    config = config.with_public_url(public_url);
                }

                Ok(StorageConfig::S3(config))
            }
            other => Err(ServiceError::config(format!(
                "unknown storage backend '{}', expected 's3' or 'fs'",
                other
            ))),
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ServiceConfig {
    /// Database configuration.
    #[cfg_attr(feature = "config", command(flatten))]
    #[serde(flatten)]
    pub postgres: PgConfig,

    /// Object storage configuration.
    #[cfg_attr(feature = "config", command(flatten))]
    #[serde(flatten)]
    pub storage: StorageParams,

    /// Authentication configuration.
    #[cfg_attr(feature = "config", command(flatten))]
    #[serde(flatten)]
    pub auth: AuthConfig,

    /// Skips applying pending database migrations on startup.
    #[cfg_attr(
        feature = "config",
        arg(long = "skip-migrations", env = "SKIP_MIGRATIONS")
    )]
    #[serde(default)]
    pub skip_migrations: bool,
}

impl ServiceConfig {
    /// Connects to PostgreSQL and applies pending migrations unless skipped.
    pub async fn connect_postgres(&self) -> Result<PgClient> {
        let pg_client = PgClient::new_with_test(self.postgres.clone()).await?;

        if !self.skip_migrations {
            carvoy_postgres::run_pending_migrations(&pg_client).await?;
        }

        Ok(pg_client)
    }

    /// Initializes the object storage backend.
    pub fn connect_storage(&self) -> Result<StorageBackend> {
        let config = self.storage.storage_config()?;
        Ok(StorageBackend::new(config)?)
    }

    /// Creates the password hashing service.
    pub fn create_password_hasher(&self) -> Result<AuthHasher> {
        AuthHasher::new()
    }

    /// Loads the token signing keys.
    pub fn load_auth_keys(&self) -> Result<AuthKeys> {
        if self.auth.token_ttl_hours <= 0 {
            return Err(ServiceError::config("token TTL must be positive"));
        }

        AuthKeys::new(
            &self.auth.jwt_secret,
            Span::new().hours(self.auth.token_ttl_hours),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_params() -> StorageParams {
        StorageParams {
            storage_backend: "fs".to_string(),
            fs_root: "./data/storage".to_string(),
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            s3_access_key_id: None,
            s3_secret_access_key: None,
            s3_public_url: None,
        }
    }

    #[test]
    fn fs_backend_builds_without_s3_settings() {
        let config = storage_params().storage_config().unwrap();
        assert_eq!(config.backend_name(), "fs");
    }

    #[test]
    fn s3_backend_requires_bucket_and_region() {
        let mut params = storage_params();
        params.storage_backend = "s3".to_string();
        assert!(params.storage_config().is_err());

        params.s3_bucket = Some("carvoy-photos".to_string());
        params.s3_region = Some("eu-central-1".to_string());
        let config = params.storage_config().unwrap();
        assert_eq!(config.backend_name(), "s3");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let mut params = storage_params();
        params.storage_backend = "ftp".to_string();
        assert!(params.storage_config().is_err());
    }
}
