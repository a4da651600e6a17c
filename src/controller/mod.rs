//! HTTP controllers exposing the explorer, projections and upload flow.

pub mod entity;
pub mod graph;
pub mod hierarchy;
pub mod monitoring;
pub mod pages;
pub mod upload;

/// Response helpers shared by the controllers.
pub mod format {
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use serde::Serialize;

    /// Serializes a value as the JSON body of a `200 OK` response.
    pub fn json<T: Serialize>(value: T) -> crate::Result<Response> {
        Ok(Json(value).into_response())
    }
}
