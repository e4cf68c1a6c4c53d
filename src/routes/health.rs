// src/routes/health.rs
//! Liveness endpoint.
//!
//! `GET /health` answers a plain `healthy` without touching the store, so it
//! stays cheap enough for a container health probe.

use axum::{routing::get, Router};

async fn health() -> &'static str {
    "healthy"
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges into the gateway router
/// regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
