//! Temperature telemetry service for fixed sensors identified by MAC address.
//!
//! Sensors `POST /temperature` with `{"mac": ..., "temperature": ...}`.
//! Plausible readings are appended to a local SQLite file; `GET /` renders
//! every device's history as a column-per-device HTML table.
//!
//! Module layout:
//! - `config`  – environment-driven [`Config`]
//! - `models`  – devices, readings, and the accepted temperature range
//! - `schema`  – first-boot table creation
//! - `store`   – [`Store`]: device cache, reading append, history query
//! - `view`    – [`HistoryTable`] pivot
//! - `render`  – HTML page rendering
//! - `routes`  – axum router gateway

pub mod config;
pub mod models;
pub mod render;
pub mod routes;
pub mod schema;
pub mod store;
pub mod view;

pub use config::Config;
pub use models::{Device, TemperatureReading, TemperatureRequest, MAX_TEMP_F, MIN_TEMP_F};
pub use render::Renderer;
pub use routes::{router, AppState};
pub use store::{History, Store};
pub use view::HistoryTable;
