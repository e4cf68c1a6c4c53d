//! Reading ingestion: `POST /temperature`.
//!
//! Sensors cannot do anything useful with a retry, so every decodable
//! request is answered 200. Out-of-range values are logged and dropped as
//! bad reads rather than rejected.

use axum::{
    body::Bytes, extract::State, http::StatusCode, response::IntoResponse, routing::post, Router,
};
use tracing::{error, info};

use super::AppState;
use crate::models::{is_plausible_temp, TemperatureRequest};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/temperature", post(handler))
}

/// The body is decoded by hand rather than with `Json` so that a missing
/// `Content-Type` or a wrong field type is a plain 400 like any other
/// decode failure.
async fn handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    // ---
    let req: TemperatureRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            error!(error = %e, "failed to decode temperature request");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let device = match state.store.resolve_device(&req.mac).await {
        Ok(device) => device,
        Err(e) => {
            error!(device = %req.mac, error = %e, "failed to resolve device");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if !is_plausible_temp(req.temperature) {
        error!(
            device = %device.name,
            temp = req.temperature,
            "temperature outside of valid range"
        );
        return StatusCode::OK.into_response();
    }

    // A failed insert does not change the response.
    if let Err(e) = state.store.append_reading(&req.mac, req.temperature).await {
        error!(
            device = %device.name,
            temp = req.temperature,
            error = %e,
            "failed to store reading"
        );
    } else {
        info!(device = %device.name, temp = req.temperature, "New reading");
    }

    (StatusCode::OK, "OK").into_response()
}
