//! Database schema management for `weather-station`.
//!
//! Ensures required tables and indexes exist before serving requests.
//! Applied once when the [`Store`](crate::store::Store) is opened.

use sqlx::SqlitePool;
use tracing::info;

// ---

/// Schema statements, executed in order. Each one is a no-op when the object
/// already exists, so re-running against an existing file loses nothing.
const STATEMENTS: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS devices (id TEXT NOT NULL PRIMARY KEY, name TEXT)",
    "CREATE TABLE IF NOT EXISTS temperature_readings (\
        id        INTEGER PRIMARY KEY, \
        device_id TEXT NOT NULL, \
        temp_f    FLOAT, \
        timestamp DATETIME)",
    "CREATE INDEX IF NOT EXISTS idx_temperature_readings_device_id \
        ON temperature_readings (device_id)",
];

/// Create the database schema (idempotent).
///
/// Stops at the first failing statement and returns its error; the caller
/// treats that as fatal.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // ---
    info!("Running db migrations...");

    for stmt in STATEMENTS {
        sqlx::query(stmt).execute(pool).await?;
        info!(stmt, "Ran migration");
    }

    info!("Database migrations complete");
    Ok(())
}
