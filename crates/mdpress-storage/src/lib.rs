//! Document store for the mdpress publishing engine.
//!
//! Provides the [`DocumentStore`] trait for saving uploaded markup documents
//! and tracking their two-state render lifecycle
//! ([`Pending`](DocumentStatus::Pending) →
//! [`Rendered`](DocumentStatus::Rendered)), along with two backends:
//!
//! - [`SqliteStore`]: SQLite-backed store used in production
//! - [`MemoryStore`]: in-memory store for tests
//!
//! Documents are keyed by name. Rendered HTML is stored alongside the source
//! content, so the store is the single collaborator the render worker and the
//! HTTP server need.

mod memory;
mod sqlite;
mod store;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{
    DocumentRecord, DocumentStatus, DocumentStore, DocumentType, PendingDocument, StoreError,
};
