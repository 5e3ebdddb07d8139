//! Versioned schema migrations
//!
//! Migrations live in `sportech-server/migrations` and are embedded at
//! compile time. Every migration is reversible.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending migrations.
pub async fn run(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!(available = MIGRATOR.iter().count(), "Running catalog migrations");
    MIGRATOR.run(pool).await?;
    tracing::info!("Catalog schema up to date");
    Ok(())
}

/// Revert applied migrations down to `target` (0 drops every catalog table).
pub async fn revert(pool: &PgPool, target: i64) -> Result<(), MigrateError> {
    tracing::info!(target, "Reverting catalog migrations");
    MIGRATOR.undo(pool, target).await
}

/// Highest migration version known to this build.
pub fn latest_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}
