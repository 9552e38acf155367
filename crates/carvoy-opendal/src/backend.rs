//! Storage backend implementation.

use std::time::Duration;

use opendal::{Operator, services};

use crate::TRACING_TARGET;
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};

/// Unified storage backend that wraps OpenDAL operators.
#[derive(Clone)]
pub struct StorageBackend {
    operator: Operator,
    config: StorageConfig,
}

impl StorageBackend {
    /// Creates a new storage backend from configuration.
    pub fn new(config: StorageConfig) -> StorageResult<Self> {
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            backend = config.backend_name(),
            "Storage backend initialized"
        );

        Ok(Self { operator, config })
    }

    /// Returns the configuration for this backend.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Reads an object from storage.
    pub async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Reading object"
        );

        let data = self.operator.read(path).await?.to_vec();

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            size = data.len(),
            "Object read complete"
        );

        Ok(data)
    }

    /// Writes data to an object in storage.
    pub async fn write(&self, path: &str, data: &[u8]) -> StorageResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            size = data.len(),
            "Writing object"
        );

        self.operator.write(path, data.to_vec()).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Object write complete"
        );

        Ok(())
    }

    /// Deletes an object from storage.
    pub async fn delete(&self, path: &str) -> StorageResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Deleting object"
        );

        self.operator.delete(path).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Object deleted"
        );

        Ok(())
    }

    /// Checks if an object exists.
    pub async fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self.operator.exists(path).await?)
    }

    /// Returns a presigned URL for downloading an object.
    ///
    /// Only supported on the S3 backend.
    pub async fn presign_read(&self, path: &str, expires_in: Duration) -> StorageResult<String> {
        if !self.config.supports_presign() {
            return Err(StorageError::unsupported(
                "presigned URLs are not available on this backend",
            ));
        }

        let presigned = self.operator.presign_read(path, expires_in).await?;
        Ok(presigned.uri().to_string())
    }

    /// Returns a presigned URL for uploading an object.
    ///
    /// Only supported on the S3 backend.
    pub async fn presign_write(&self, path: &str, expires_in: Duration) -> StorageResult<String> {
        if !self.config.supports_presign() {
            return Err(StorageError::unsupported(
                "presigned URLs are not available on this backend",
            ));
        }

        let presigned = self.operator.presign_write(path, expires_in).await?;
        Ok(presigned.uri().to_string())
    }

    /// Returns the public URL of an object, when the backend exposes one.
    ///
    /// Falls back to `None` when no public base URL is configured; callers
    /// should then use [`presign_read`].
    ///
    /// [`presign_read`]: Self::presign_read
    pub fn public_url(&self, path: &str) -> Option<String> {
        match &self.config {
            StorageConfig::S3(s3) => s3
                .public_url
                .as_ref()
                .map(|base| format!("{}/{}", base.trim_end_matches('/'), path)),
            StorageConfig::Fs(_) => None,
        }
    }

    /// Creates an OpenDAL operator based on configuration.
    #[allow(unreachable_patterns)]
    fn create_operator(config: &StorageConfig) -> StorageResult<Operator> {
        match config {
            #[cfg(feature = "s3")]
            StorageConfig::S3(s3) => {
                let mut builder = services::S3::default().bucket(&s3.bucket).region(&s3.region);

                if let Some(ref endpoint) = s3.endpoint {
                    builder = builder.endpoint(endpoint);
                }

                if let Some(ref access_key_id) = s3.access_key_id {
                    builder = builder.access_key_id(access_key_id);
                }

                if let Some(ref secret_access_key) = s3.secret_access_key {
                    builder = builder.secret_access_key(secret_access_key);
                }

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }

            #[cfg(feature = "fs")]
            StorageConfig::Fs(fs) => {
                let builder = services::Fs::default().root(&fs.root);

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }

            // This should never be reached if the config was properly created
            // with the same features enabled
            #[allow(unreachable_patterns)]
            _ => Err(StorageError::init(format!(
                "Backend {:?} is not supported with current features",
                config.backend_name()
            ))),
        }
    }
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("backend", &self.config.backend_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsConfig;

    fn fs_backend(root: &std::path::Path) -> StorageBackend {
        let config = StorageConfig::Fs(FsConfig::new(root.to_string_lossy()));
        StorageBackend::new(config).unwrap()
    }

    #[tokio::test]
    async fn write_read_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = fs_backend(dir.path());

        backend.write("photos/test.webp", b"webp-bytes").await.unwrap();
        assert!(backend.exists("photos/test.webp").await.unwrap());

        let data = backend.read("photos/test.webp").await.unwrap();
        assert_eq!(data, b"webp-bytes");

        backend.delete("photos/test.webp").await.unwrap();
        assert!(!backend.exists("photos/test.webp").await.unwrap());
    }

    #[tokio::test]
    async fn missing_object_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let backend = fs_backend(dir.path());

        let err = backend.read("does/not/exist").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn fs_backend_rejects_presign() {
        let dir = tempfile::tempdir().unwrap();
        let backend = fs_backend(dir.path());

        let err = backend
            .presign_read("photos/test.webp", Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unsupported(_)));

        let err = backend
            .presign_write("photos/test.webp", Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unsupported(_)));
    }

    #[test]
    fn public_url_requires_configured_base() {
        let dir = tempfile::tempdir().unwrap();
        let backend = fs_backend(dir.path());
        assert!(backend.public_url("photos/test.webp").is_none());
    }
}
