//! Background render worker.
//!
//! Periodically sweeps the document store for pending uploads, runs the
//! conversion engine on each, and persists the rendered HTML. The worker is
//! the only writer of the `Rendered` state; the HTTP server only reads.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use mdpress_storage::SqliteStore;
//! use mdpress_worker::RenderWorker;
//!
//! let store = Arc::new(SqliteStore::connect("mdpress.db".as_ref()).await?);
//! let handle = RenderWorker::new(store, Duration::from_secs(5)).spawn();
//! // ... run the server ...
//! handle.stop().await;
//! ```

use std::sync::Arc;
use std::time::Duration;

use mdpress_storage::{DocumentStore, DocumentType, StoreError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Periodic renderer of pending documents.
pub struct RenderWorker {
    store: Arc<dyn DocumentStore>,
    period: Duration,
}

impl RenderWorker {
    /// Create a worker polling the store every `period`.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, period: Duration) -> Self {
        Self { store, period }
    }

    /// Spawn the polling loop on the current tokio runtime.
    ///
    /// The loop keeps running on store errors; individual sweep failures are
    /// logged and retried on the next tick.
    #[must_use]
    pub fn spawn(self) -> WorkerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match self.run_once().await {
                            Ok(0) => {}
                            Ok(rendered) => {
                                tracing::info!(rendered, "Render sweep finished");
                            }
                            Err(err) => {
                                tracing::error!(error = %err, "Render sweep failed");
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        WorkerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }

    /// Run a single render sweep.
    ///
    /// Fetches all pending documents, renders each, and marks it rendered.
    /// A failure on one document is logged and does not block the others.
    /// Returns the number of documents rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the pending-document query itself fails.
    pub async fn run_once(&self) -> Result<usize, StoreError> {
        let pending = self.store.pending().await?;
        let mut rendered = 0;

        for document in pending {
            let html = match document.doc_type {
                DocumentType::Md => mdpress_renderer::render_document(&document.content),
            };
            match self.store.complete(&document.name, &html).await {
                Ok(()) => {
                    tracing::info!(name = %document.name, "Rendered document");
                    rendered += 1;
                }
                Err(err) => {
                    tracing::error!(name = %document.name, error = %err, "Failed to persist rendered document");
                }
            }
        }

        Ok(rendered)
    }
}

/// Handle to a spawned [`RenderWorker`].
pub struct WorkerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    /// Signal the worker to stop and wait for the loop to exit.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    /// Abort the worker without waiting.
    pub fn abort(&self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use mdpress_storage::{DocumentStatus, DocumentType, MemoryStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_run_once_renders_all_pending() {
        let store = Arc::new(MemoryStore::new());
        store.save("a", "# Title", "UTF-8", DocumentType::Md).await.unwrap();
        store.save("b", "- item", "UTF-8", DocumentType::Md).await.unwrap();

        let worker = RenderWorker::new(Arc::clone(&store) as Arc<dyn DocumentStore>, Duration::from_secs(1));
        let rendered = worker.run_once().await.unwrap();

        assert_eq!(rendered, 2);
        assert_eq!(
            store.status("a").await.unwrap(),
            Some(DocumentStatus::Rendered)
        );
        let html = store.html("a").await.unwrap().unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.starts_with("<!DOCTYPE html>"));

        let html = store.html("b").await.unwrap().unwrap();
        assert!(html.contains("<li>item</li>"));
    }

    #[tokio::test]
    async fn test_run_once_with_nothing_pending() {
        let store = Arc::new(MemoryStore::new());
        let worker = RenderWorker::new(store, Duration::from_secs(1));

        assert_eq!(worker.run_once().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_run_once_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        store.save("a", "text", "UTF-8", DocumentType::Md).await.unwrap();

        let worker = RenderWorker::new(Arc::clone(&store) as Arc<dyn DocumentStore>, Duration::from_secs(1));
        assert_eq!(worker.run_once().await.unwrap(), 1);
        assert_eq!(worker.run_once().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_spawned_worker_renders_and_stops() {
        let store = Arc::new(MemoryStore::new());
        store.save("post", "# Hi", "UTF-8", DocumentType::Md).await.unwrap();

        let handle = RenderWorker::new(
            Arc::clone(&store) as Arc<dyn DocumentStore>,
            Duration::from_millis(10),
        )
        .spawn();

        // First tick fires immediately; give the sweep a moment to land.
        for _ in 0..50 {
            if store.status("post").await.unwrap() == Some(DocumentStatus::Rendered) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        handle.stop().await;

        assert_eq!(
            store.status("post").await.unwrap(),
            Some(DocumentStatus::Rendered)
        );
    }
}
