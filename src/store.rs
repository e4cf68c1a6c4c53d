//! SQLite-backed store for devices and temperature readings.
//!
//! The host opens exactly one [`Store`] and shares it behind an `Arc`. Device
//! lookups go through an in-memory cache that lives as long as the store and
//! is never invalidated; readings are append-only.

use std::{collections::HashMap, path::Path, str::FromStr, time::Duration};

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::{Device, TemperatureReading};
use crate::schema;

// ---

/// Device history keyed by device name; each list is newest first.
pub type History = HashMap<String, Vec<TemperatureReading>>;

/// Persistence for devices and readings plus the device cache.
pub struct Store {
    // ---
    pool: SqlitePool,

    /// MAC → device. The lock is held across the backing lookup so a miss
    /// and its insert form one critical section.
    devices: Mutex<HashMap<String, Device>>,
}

impl Store {
    // ---

    /// Open (creating if needed) the database file at `path` and bootstrap
    /// the schema.
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self> {
        // ---
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow!(
                    "Failed to create database directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }

        info!("Opening database at {}", path.display());

        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await
            .map_err(|e| anyhow!("Failed to open database '{}': {}", path.display(), e))?;

        Self::with_pool(pool).await
    }

    /// Open a private in-memory database (for testing).
    ///
    /// Pinned to a single connection that is never recycled, since every
    /// SQLite in-memory connection is its own database.
    pub async fn open_in_memory() -> Result<Self> {
        // ---
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?;

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if it is absent.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        // ---
        schema::create_schema(&pool)
            .await
            .map_err(|e| anyhow!("Schema bootstrap failed: {}", e))?;

        Ok(Self {
            pool,
            devices: Mutex::new(HashMap::new()),
        })
    }

    /// The underlying connection pool.
    ///
    /// Devices are provisioned out of band; this is the way in for admin
    /// tooling and tests.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // === Device operations ===

    /// Resolve a MAC to its device, reading through the cache.
    ///
    /// An id with no `devices` row resolves to [`Device::unnamed`]. That
    /// fallback is cached but never written to the database, so a row added
    /// later only shows up after a restart.
    pub async fn resolve_device(&self, id: &str) -> Result<Device, sqlx::Error> {
        // ---
        // Held across the query so a miss and its insert cannot interleave
        // with another resolve of the same id.
        let mut devices = self.devices.lock().await;

        if let Some(device) = devices.get(id) {
            return Ok(device.clone());
        }

        let row: Option<(String, String)> =
            sqlx::query_as("SELECT id, COALESCE(name, id) FROM devices WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let device = match row {
            Some((id, name)) => Device { id, name },
            None => {
                debug!(device = id, "Unknown device, using id as name");
                Device::unnamed(id)
            }
        };

        devices.insert(id.to_string(), device.clone());
        Ok(device)
    }

    /// Cached entry for `id`, if it has been resolved before.
    pub async fn cached_device(&self, id: &str) -> Option<Device> {
        self.devices.lock().await.get(id).cloned()
    }

    // === Reading operations ===

    /// Append a reading stamped with the current time.
    ///
    /// `device_id` is not checked against `devices`.
    pub async fn append_reading(&self, device_id: &str, temp_f: f32) -> Result<(), sqlx::Error> {
        // ---
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO temperature_readings (device_id, temp_f, timestamp) VALUES (?, ?, ?)",
        )
        .bind(device_id)
        .bind(temp_f)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load every reading of every known device, grouped by device name.
    ///
    /// Readings whose `device_id` has no `devices` row are left out. Within
    /// a device, readings are newest first.
    pub async fn load_history(&self) -> Result<History, sqlx::Error> {
        // ---
        let rows: Vec<(String, f32, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT COALESCE(d.name, d.id), r.temp_f, r.timestamp
              FROM devices d
              JOIN temperature_readings r ON d.id = r.device_id
             ORDER BY r.timestamp DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut history = History::new();
        for (name, temp_f, timestamp) in rows {
            history
                .entry(name)
                .or_default()
                .push(TemperatureReading { temp_f, timestamp });
        }

        Ok(history)
    }
}
