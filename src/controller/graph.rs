use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::{app::AppContext, controller::format, projection, Error, Result};

/// Returns the node/edge projection of the active ontology.
pub async fn show(State(ctx): State<AppContext>) -> Result<Response> {
    let ontology = ctx.ontology.snapshot().ok_or(Error::NoOntologyLoaded)?;
    format::json(projection::project(&ontology))
}

pub fn routes() -> Router<AppContext> {
    Router::new().route("/graph", get(show))
}
