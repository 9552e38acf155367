//! Embedded migration execution.
//!
//! Migrations are compiled into the binary via `embed_migrations!` and applied
//! on startup. The diesel migration harness is synchronous, so pending
//! migrations run on a blocking task through [`AsyncConnectionWrapper`].

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Outcome of a migration run.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// Versions applied during this run, in order.
    pub applied_versions: Vec<String>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl MigrationResult {
    /// Creates a new migration result.
    pub fn new(applied_versions: Vec<String>, duration: Duration) -> Self {
        Self {
            applied_versions,
            duration,
        }
    }

    /// Returns whether any migrations were applied.
    pub fn applied_any(&self) -> bool {
        !self.applied_versions.is_empty()
    }
}

/// Runs all pending migrations on the database.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationResult> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Starting database migration process",
    );

    let start_time = Instant::now();
    let conn = pg.get_pooled_connection().await?;

    let mut conn: AsyncConnectionWrapper<_> = conn.into();
    let results = spawn_blocking(move || match conn.run_pending_migrations(MIGRATIONS) {
        Ok(versions) => Ok(versions
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()),
        Err(x) => Err(x),
    })
    .await;

    let duration = start_time.elapsed();
    let results = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "Migration task panicked, join error occurred"
        );

        PgError::Migration(err.into())
    })?;

    let versions = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = &err,
            "Database migration process failed"
        );

        PgError::Migration(err)
    })?;

    if versions.is_empty() {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            "Database schema is already up to date, no migrations to apply"
        );
    } else {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            migrations_count = versions.len(),
            "Database migration process completed successfully"
        );
    }

    Ok(MigrationResult::new(versions, duration))
}
