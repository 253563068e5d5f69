//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mdpress_storage::StoreError;

/// Server error type, mapped to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Invalid upload request (missing document, bad encoding, bad name).
    #[error("{0}")]
    Unprocessable(&'static str),

    /// Unknown document name.
    #[error("Document not found")]
    NotFound,

    /// Store failure (including duplicate names, matching the original
    /// upload contract of answering 500 on integrity errors).
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        (status, self.to_string()).into_response()
    }
}
