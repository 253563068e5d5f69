//! Post serving and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use mdpress_storage::DocumentStatus;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for `GET /`.
#[derive(Serialize)]
pub(crate) struct PostsResponse {
    /// Names of documents with rendered HTML available.
    rendered: Vec<String>,
    /// Names of documents still waiting for the render worker.
    pending: Vec<String>,
}

/// Handle `GET /posts/{name}`.
///
/// Answers the rendered page once the worker has processed the document,
/// and a plain status body while it is still pending.
pub(crate) async fn get_post(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    match state.store.status(&name).await? {
        None => Err(ServerError::NotFound),
        Some(DocumentStatus::Pending) => {
            Ok("Still processing document".into_response())
        }
        Some(DocumentStatus::Rendered) => {
            let html = state.store.html(&name).await?.ok_or(ServerError::NotFound)?;
            Ok(Html(html).into_response())
        }
    }
}

/// Handle `GET /`.
pub(crate) async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PostsResponse>, ServerError> {
    let mut rendered = Vec::new();
    let mut pending = Vec::new();

    for record in state.store.list().await? {
        match record.status {
            DocumentStatus::Rendered => rendered.push(record.name),
            DocumentStatus::Pending => pending.push(record.name),
        }
    }

    Ok(Json(PostsResponse { rendered, pending }))
}
