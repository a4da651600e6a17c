use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;

use crate::ontology::{IriError, LoadError, OntologyError};
use crate::projection::{DetailError, HierarchyError};

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A read route was invoked before any ontology was uploaded.
    #[error("no ontology loaded")]
    NoOntologyLoaded,

    /// The requested entity does not exist in the active ontology.
    #[error(transparent)]
    Detail(#[from] DetailError),

    /// The request was malformed (missing identifier, missing file field).
    #[error("{0}")]
    BadRequest(String),

    /// The class hierarchy could not be rendered.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    /// The uploaded document could not be parsed.
    #[error(transparent)]
    Document(#[from] LoadError),

    /// The assembled ontology violated aggregate invariants.
    #[error(transparent)]
    Ontology(#[from] OntologyError),

    /// An identifier failed IRI validation.
    #[error(transparent)]
    Iri(#[from] IriError),

    /// The configuration file could not be deserialized.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// The upload storage backend failed.
    #[error(transparent)]
    Storage(#[from] opendal::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Wraps an arbitrary error into an opaque message variant.
    #[must_use]
    pub fn wrap(err: impl std::error::Error) -> Self {
        Self::Message(err.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NoOntologyLoaded => StatusCode::SEE_OTHER,
            Self::Detail(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Document(_) | Self::Iri(_) => StatusCode::BAD_REQUEST,
            Self::Hierarchy(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Ontology(_) | Self::Config(_) | Self::Storage(_) | Self::IO(_)
            | Self::Message(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Reads against an empty store send the browser to the upload page
        // instead of reporting a failure.
        if matches!(self, Self::NoOntologyLoaded) {
            return Redirect::to("/upload").into_response();
        }

        let status = self.status();
        if status.is_server_error() {
            tracing::error!(err.msg = %self, err.detail = ?self, "request failed");
        } else {
            tracing::debug!(err.msg = %self, "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
