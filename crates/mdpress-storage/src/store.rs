//! Store trait and shared types.

use async_trait::async_trait;

/// Render lifecycle state of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Uploaded, waiting for the render worker.
    Pending,
    /// Rendered HTML is available.
    Rendered,
}

impl DocumentStatus {
    /// Stable string form used by storage backends.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Rendered => "RENDERED",
        }
    }

    /// Parse the stable string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "RENDERED" => Some(Self::Rendered),
            _ => None,
        }
    }
}

/// Markup dialect of an uploaded document.
///
/// Uploads declare their dialect via the `doc_type` form field; the render
/// worker dispatches on it. Only one dialect exists today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentType {
    /// Line-oriented lightweight markup handled by the conversion engine.
    Md,
}

impl DocumentType {
    /// Stable string form used by storage backends and the upload form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md => "MD",
        }
    }

    /// Parse the stable string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MD" => Some(Self::Md),
            _ => None,
        }
    }
}

/// Name and status of a stored document, as returned by listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Document name (unique key).
    pub name: String,
    /// Current lifecycle state.
    pub status: DocumentStatus,
}

/// A document awaiting rendering: name, dialect and raw markup content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDocument {
    /// Document name (unique key).
    pub name: String,
    /// Markup dialect declared at upload.
    pub doc_type: DocumentType,
    /// Raw markup content as uploaded.
    pub content: String,
}

/// Store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A document with this name already exists.
    #[error("document already exists: {0}")]
    Duplicate(String),
    /// No document with this name.
    #[error("document not found: {0}")]
    NotFound(String),
    /// Backend failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Document store abstraction.
///
/// The render worker only needs `pending` + `complete`; the HTTP server only
/// needs `save`, `status`, `list` and `html`. Backends make no guarantee
/// about connection lifetime beyond the method call.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document in the `Pending` state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if the name is already taken.
    async fn save(
        &self,
        name: &str,
        content: &str,
        encoding: &str,
        doc_type: DocumentType,
    ) -> Result<(), StoreError>;

    /// Look up the lifecycle state of a document.
    async fn status(&self, name: &str) -> Result<Option<DocumentStatus>, StoreError>;

    /// List all documents with their statuses, ordered by name.
    async fn list(&self) -> Result<Vec<DocumentRecord>, StoreError>;

    /// Fetch all documents still awaiting rendering.
    async fn pending(&self) -> Result<Vec<PendingDocument>, StoreError>;

    /// Store rendered HTML and mark the document `Rendered`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the document does not exist.
    async fn complete(&self, name: &str, html: &str) -> Result<(), StoreError>;

    /// Fetch rendered HTML for a document.
    ///
    /// Returns `None` while the document is pending or unknown.
    async fn html(&self, name: &str) -> Result<Option<String>, StoreError>;
}
