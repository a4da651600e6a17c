//! Liveness routes used to monitor the running server.

use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::{app::AppContext, controller::format, Result};

/// Represents the health status of the application.
#[derive(Serialize)]
pub struct Health {
    pub ok: bool,
}

/// Check application ping endpoint.
pub async fn ping() -> Result<Response> {
    format::json(Health { ok: true })
}

/// Check application health endpoint.
pub async fn health() -> Result<Response> {
    format::json(Health { ok: true })
}

pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/_ping", get(ping))
        .route("/_health", get(health))
}
