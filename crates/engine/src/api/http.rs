//! HTTP routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/status", get(status))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    open_sessions: usize,
    default_locale: String,
}

async fn status(State(app): State<Arc<App>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        open_sessions: app.sessions.len(),
        default_locale: app.config.default_locale.to_string(),
    })
}
