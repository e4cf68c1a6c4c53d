//! History page: `GET /`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tracing::{debug, error};

use super::AppState;
use crate::view::HistoryTable;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/", get(handler))
}

async fn handler(State(state): State<AppState>) -> impl IntoResponse {
    // ---
    let history = match state.store.load_history().await {
        Ok(history) => history,
        Err(e) => {
            error!(error = %e, "failed to load temperature history");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let table = HistoryTable::from_history(history);
    debug!(
        devices = table.headers.len(),
        rows = table.rows.len(),
        "GET / - rendering history"
    );

    match state.renderer.index(&table) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!(error = %e, "failed to render history page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
