//! Configuration loader for the `weather-station` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Nothing else in the crate reads `env::var` for
//! settings; handlers only ever see the resulting [`Config`].
//!
use std::{env, path::PathBuf};

use anyhow::{anyhow, Result};

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./data/weather-station.db";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8367;

/// Parse an optional numeric environment variable with a default value.
macro_rules! parse_env {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Path of the SQLite database file.
    pub db_path: PathBuf,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        // ---
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            db_pool_max: 5,
            port: DEFAULT_PORT,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `WEATHER_DB_PATH` – SQLite file (default: `./data/weather-station.db`)
/// - `WEATHER_PORT` – listen port (default: 8367)
/// - `DB_POOL_MAX` – max DB connections (default: 5)
///
/// Returns an error if a numeric variable is set but cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();

    let db_path = env::var("WEATHER_DB_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or(defaults.db_path);
    let port = parse_env!("WEATHER_PORT", u16, defaults.port);
    let db_pool_max = parse_env!("DB_POOL_MAX", u32, defaults.db_pool_max);

    if db_pool_max == 0 {
        return Err(anyhow!("Invalid DB_POOL_MAX: must be at least 1"));
    }

    Ok(Config {
        db_path,
        db_pool_max,
        port,
    })
}

impl Config {
    /// Log the loaded configuration at startup.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  WEATHER_DB_PATH : {}", self.db_path.display());
        tracing::info!("  WEATHER_PORT    : {}", self.port);
        tracing::info!("  DB_POOL_MAX     : {}", self.db_pool_max);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_defaults_match_station_layout() {
        // ---
        let cfg = Config::default();

        assert_eq!(cfg.port, 8367);
        assert_eq!(cfg.db_path, PathBuf::from("./data/weather-station.db"));
        assert_eq!(cfg.db_pool_max, 5);
    }
}
