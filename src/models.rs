//! Simple data models for the weather station.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// Coldest plausible sensor value in °F. Anything lower is a bad read.
pub const MIN_TEMP_F: f32 = -67.0;

/// Hottest plausible sensor value in °F. Anything higher is a bad read.
pub const MAX_TEMP_F: f32 = 257.0;

/// A sensor device, keyed by its MAC address.
///
/// The MAC is stored exactly as the sensor reports it, with no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    // ---
    pub id: String,
    pub name: String,
}

impl Device {
    /// Device for an id with no row in `devices`; the name falls back to the id.
    pub fn unnamed(id: &str) -> Self {
        // ---
        Self {
            id: id.to_string(),
            name: id.to_string(),
        }
    }
}

/// One stored temperature sample, as shown in the history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReading {
    // ---
    pub temp_f: f32,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /temperature`.
#[derive(Debug, Deserialize)]
pub struct TemperatureRequest {
    // ---
    pub mac: String,
    pub temperature: f32,
}

/// True when `temp_f` lies in `[MIN_TEMP_F, MAX_TEMP_F]`, bounds included.
pub fn is_plausible_temp(temp_f: f32) -> bool {
    (MIN_TEMP_F..=MAX_TEMP_F).contains(&temp_f)
}
