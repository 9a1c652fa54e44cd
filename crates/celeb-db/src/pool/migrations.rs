//! Schema migrations loaded from a directory at runtime

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{info, instrument};

/// Migration failures
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Migrations directory not found: {0}")]
    MissingDirectory(String),

    #[error(transparent)]
    Migrate(#[from] MigrateError),
}

/// Apply every pending migration found in `dir`
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool, dir: &str) -> Result<(), MigrationError> {
    let path = Path::new(dir);
    if !path.is_dir() {
        return Err(MigrationError::MissingDirectory(dir.to_string()));
    }

    let migrator = Migrator::new(path).await?;
    migrator.run(pool).await?;

    info!(count = migrator.iter().count(), "Migrations applied");
    Ok(())
}
