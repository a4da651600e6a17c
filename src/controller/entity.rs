use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::{app::AppContext, controller::format, projection, Error, Result};

#[derive(Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub iri: Option<String>,
}

/// Resolves a single entity into its flat detail record.
///
/// A missing or empty identifier is a client error; an identifier matching
/// no entity is a distinct not-found response.
pub async fn show(
    State(ctx): State<AppContext>,
    Query(params): Query<DetailParams>,
) -> Result<Response> {
    let identifier = params
        .iri
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::BadRequest("missing entity identifier".to_string()))?;

    let ontology = ctx.ontology.snapshot().ok_or(Error::NoOntologyLoaded)?;
    let record = projection::resolve(&ontology, identifier)?;
    format::json(record)
}

pub fn routes() -> Router<AppContext> {
    Router::new().route("/entity", get(show))
}
