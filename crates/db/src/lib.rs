//! SQLite storage layer: pool construction, migrations, models, and
//! repositories.

pub mod models;
pub mod repositories;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

/// Shared connection pool alias used across the workspace.
pub type DbPool = SqlitePool;

/// Connect to the database, creating the file when missing.
///
/// Foreign key enforcement is enabled on every connection; cascade and
/// restrict behavior across the schema depends on it.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    debug!("Connecting to database: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    info!("Database connection established");
    Ok(pool)
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    debug!("Database migrations completed");
    Ok(())
}

/// Connectivity probe backing the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
