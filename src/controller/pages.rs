use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::{app::AppContext, projection, Error, Result};

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

/// Renders the explorer page with the hierarchy markup inlined.
///
/// The graph and detail panels load their data from the JSON routes through
/// the page's own script.
pub async fn index(State(ctx): State<AppContext>) -> Result<Response> {
    let ontology = ctx.ontology.snapshot().ok_or(Error::NoOntologyLoaded)?;
    let tree = projection::class_tree(&ontology)?;
    let markup = projection::render_html(&tree);
    Ok(Html(INDEX_TEMPLATE.replace("<!-- TREE -->", &markup)).into_response())
}

pub fn routes() -> Router<AppContext> {
    Router::new().route("/", get(index))
}
