use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::projection::TreeNode;
use crate::{app::AppContext, controller::format, projection, Error, Result};

#[derive(Serialize)]
pub struct HierarchyResponse {
    pub roots: Vec<TreeNode>,
}

/// Returns the rooted class hierarchy of the active ontology.
pub async fn show(State(ctx): State<AppContext>) -> Result<Response> {
    let ontology = ctx.ontology.snapshot().ok_or(Error::NoOntologyLoaded)?;
    let roots = projection::class_tree(&ontology)?;
    format::json(HierarchyResponse { roots })
}

pub fn routes() -> Router<AppContext> {
    Router::new().route("/hierarchy", get(show))
}
