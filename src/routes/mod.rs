//! Route gateway: merges the endpoint sub-routers and shared middleware.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{render::Renderer, store::Store};

mod health;
mod history;
mod temperature;

// ---

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    // ---
    pub store: Arc<Store>,
    pub renderer: Arc<Renderer>,
}

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(temperature::router())
        .merge(history::router())
        .merge(health::router())
        .fallback(not_found)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
