use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;

use crate::projection::sanitize;
use crate::{app::AppContext, ontology, Error, Result};

const UPLOAD_FORM: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Upload Ontology</title>
    <style>
      body { background-color: #222; color: white; font-family: Arial, sans-serif; padding: 20px; }
      input { padding: 8px; }
    </style>
  </head>
  <body>
    <h1>Upload Ontology File</h1>
    <form method="post" enctype="multipart/form-data">
      <input type="file" name="file"><br><br>
      <input type="submit" value="Upload">
    </form>
  </body>
</html>
"#;

/// Serves the upload form.
pub async fn form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// Accepts an ontology document, stores the raw bytes and swaps the active
/// handle, then sends the browser back to the explorer.
pub async fn accept(State(ctx): State<AppContext>, mut multipart: Multipart) -> Result<Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| Error::BadRequest(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(ToString::to_string)
            .unwrap_or_else(|| "ontology.ttl".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|err| Error::BadRequest(err.to_string()))?;

        // Only documents that actually load replace the active ontology or
        // reach storage.
        let parsed = ontology::parse_bytes(&bytes)?;
        let stored_name = sanitize(&file_name);
        ctx.storage.save(&stored_name, bytes.to_vec()).await?;
        let snapshot = ctx.ontology.swap(parsed);

        tracing::info!(
            file = %stored_name,
            classes = snapshot.classes().len(),
            properties = snapshot.properties().len(),
            individuals = snapshot.individuals().len(),
            "ontology replaced"
        );
        return Ok(Redirect::to("/").into_response());
    }

    Err(Error::BadRequest("no file uploaded".to_string()))
}

pub fn routes() -> Router<AppContext> {
    Router::new().route("/upload", get(form).post(accept))
}
