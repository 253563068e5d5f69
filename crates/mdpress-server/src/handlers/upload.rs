//! Upload endpoint.
//!
//! Accepts a multipart form with a required `document` file field and
//! optional `name`, `encoding` and `doc_type` fields. The decoded text is
//! stored in the pending state; the background worker renders it later.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use mdpress_storage::DocumentType;

use crate::error::ServerError;
use crate::state::AppState;

/// Default encoding when the form does not declare one.
const DEFAULT_ENCODING: &str = "UTF-8";

/// Encoding labels the server accepts. Uploads are decoded as UTF-8;
/// anything else answers 422, like an unknown codec in the original system.
const SUPPORTED_ENCODINGS: &[&str] = &["UTF-8", "utf-8", "utf8", "UTF8"];

/// Handle `POST /upload`.
pub(crate) async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ServerError> {
    let mut document: Option<(Option<String>, Vec<u8>)> = None;
    let mut name: Option<String> = None;
    let mut encoding: Option<String> = None;
    let mut doc_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ServerError::Unprocessable("Malformed multipart body"))?
    {
        match field.name() {
            Some("document") => {
                let filename = field.file_name().map(ToOwned::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| ServerError::Unprocessable("Malformed multipart body"))?;
                document = Some((filename, data.to_vec()));
            }
            Some("name") => {
                name = field.text().await.ok();
            }
            Some("encoding") => {
                encoding = field.text().await.ok();
            }
            Some("doc_type") => {
                doc_type = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some((filename, data)) = document else {
        return Err(ServerError::Unprocessable("Document not found"));
    };

    let doc_type = match doc_type {
        Some(value) => DocumentType::parse(&value)
            .ok_or(ServerError::Unprocessable("Incorrect doc_type"))?,
        None => DocumentType::Md,
    };

    let encoding = encoding.unwrap_or_else(|| DEFAULT_ENCODING.to_owned());
    if !SUPPORTED_ENCODINGS.contains(&encoding.as_str()) {
        return Err(ServerError::Unprocessable("Incorrect encoding"));
    }
    let Ok(content) = String::from_utf8(data) else {
        return Err(ServerError::Unprocessable("Incorrect encoding"));
    };

    // A present-but-empty name field is an error, not a fallback to the
    // filename.
    let name = name.unwrap_or_else(|| filename.unwrap_or_default());
    if !is_valid_name(&name) {
        return Err(ServerError::Unprocessable("Incorrect name"));
    }

    state.store.save(&name, &content, &encoding, doc_type).await?;

    tracing::info!(name = %name, "Document uploaded");
    Ok("Document uploaded")
}

/// A document name must be non-empty and free of path separators, since it
/// becomes part of the `/posts/{name}` URL.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && name != ".." && name != "."
}
