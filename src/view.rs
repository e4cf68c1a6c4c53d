//! Column-per-device table built from the store's history.
//!
//! Rows line up by position in each device's newest-first history, not by
//! timestamp: devices report on independent schedules, so row `r` is simply
//! the `r`-th most recent reading of every column that has one.

use serde::Serialize;

use crate::models::TemperatureReading;
use crate::store::History;

// ---

/// Tabular history: sorted device names and index-aligned rows.
#[derive(Debug, Default, Serialize)]
pub struct HistoryTable {
    // ---
    pub headers: Vec<String>,

    /// Every row has `headers.len()` cells; `None` where a device has run
    /// out of readings.
    pub rows: Vec<Vec<Option<TemperatureReading>>>,
}

impl HistoryTable {
    /// Pivot per-device histories into columns ordered by device name.
    pub fn from_history(mut history: History) -> Self {
        // ---
        let mut headers: Vec<String> = history.keys().cloned().collect();
        headers.sort();

        let row_count = history.values().map(Vec::len).max().unwrap_or(0);

        let mut columns: Vec<_> = headers
            .iter()
            .map(|name| {
                history
                    .remove(name)
                    .unwrap_or_default()
                    .into_iter()
                    .map(Some)
                    .chain(std::iter::repeat(None))
            })
            .collect();

        let rows = (0..row_count)
            .map(|_| columns.iter_mut().map(|col| col.next().flatten()).collect())
            .collect();

        Self { headers, rows }
    }
}
