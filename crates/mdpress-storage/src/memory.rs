//! In-memory document store for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{
    DocumentRecord, DocumentStatus, DocumentStore, DocumentType, PendingDocument, StoreError,
};

#[derive(Clone, Debug)]
struct StoredDocument {
    content: String,
    doc_type: DocumentType,
    status: DocumentStatus,
    html: Option<String>,
}

/// In-memory [`DocumentStore`] backed by a map.
///
/// Keeps documents in a `BTreeMap` so listing order matches the SQLite
/// backend's `ORDER BY name`.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<String, StoredDocument>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, StoredDocument>> {
        // Mutex poisoning only happens if a holder panicked; tests want the
        // data regardless.
        self.documents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn save(
        &self,
        name: &str,
        content: &str,
        _encoding: &str,
        doc_type: DocumentType,
    ) -> Result<(), StoreError> {
        let mut documents = self.lock();
        if documents.contains_key(name) {
            return Err(StoreError::Duplicate(name.to_owned()));
        }
        documents.insert(
            name.to_owned(),
            StoredDocument {
                content: content.to_owned(),
                doc_type,
                status: DocumentStatus::Pending,
                html: None,
            },
        );
        Ok(())
    }

    async fn status(&self, name: &str) -> Result<Option<DocumentStatus>, StoreError> {
        Ok(self.lock().get(name).map(|doc| doc.status))
    }

    async fn list(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        Ok(self
            .lock()
            .iter()
            .map(|(name, doc)| DocumentRecord {
                name: name.clone(),
                status: doc.status,
            })
            .collect())
    }

    async fn pending(&self) -> Result<Vec<PendingDocument>, StoreError> {
        Ok(self
            .lock()
            .iter()
            .filter(|(_, doc)| doc.status == DocumentStatus::Pending)
            .map(|(name, doc)| PendingDocument {
                name: name.clone(),
                doc_type: doc.doc_type,
                content: doc.content.clone(),
            })
            .collect())
    }

    async fn complete(&self, name: &str, html: &str) -> Result<(), StoreError> {
        let mut documents = self.lock();
        let Some(doc) = documents.get_mut(name) else {
            return Err(StoreError::NotFound(name.to_owned()));
        };
        doc.html = Some(html.to_owned());
        doc.status = DocumentStatus::Rendered;
        Ok(())
    }

    async fn html(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(name).and_then(|doc| doc.html.clone()))
    }
}
