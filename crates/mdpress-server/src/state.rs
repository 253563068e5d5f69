//! Application state.

use std::sync::Arc;

use mdpress_storage::DocumentStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Document store for uploads and rendered posts.
    pub(crate) store: Arc<dyn DocumentStore>,
}
