//! SQLite-backed document store.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::store::{
    DocumentRecord, DocumentStatus, DocumentStore, DocumentType, PendingDocument, StoreError,
};

/// Documents table schema.
const SCHEMA: &str = "\
    CREATE TABLE IF NOT EXISTS documents (
        name     TEXT PRIMARY KEY,
        content  TEXT NOT NULL,
        encoding TEXT NOT NULL,
        doc_type TEXT NOT NULL,
        status   TEXT NOT NULL,
        html     TEXT
    )";

/// SQLite-backed [`DocumentStore`].
///
/// The database file is created on first connect, along with the schema.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub async fn connect(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// Open an in-memory database. Intended for tests.
    ///
    /// Uses a single connection: each SQLite in-memory connection is its own
    /// database, so a larger pool would fragment the data.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(StoreError::Database)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

fn map_insert_error(err: sqlx::Error, name: &str) -> StoreError {
    match err {
        sqlx::Error::Database(db)
            if db.kind() == sqlx::error::ErrorKind::UniqueViolation =>
        {
            StoreError::Duplicate(name.to_owned())
        }
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn save(
        &self,
        name: &str,
        content: &str,
        encoding: &str,
        doc_type: DocumentType,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO documents (name, content, encoding, doc_type, status) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(content)
        .bind(encoding)
        .bind(doc_type.as_str())
        .bind(DocumentStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| map_insert_error(err, name))?;

        tracing::debug!(name = %name, "Saved document");
        Ok(())
    }

    async fn status(&self, name: &str) -> Result<Option<DocumentStatus>, StoreError> {
        let status: Option<String> =
            sqlx::query_scalar("SELECT status FROM documents WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(status.as_deref().and_then(DocumentStatus::parse))
    }

    async fn list(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT name, status FROM documents ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(name, status)| {
                DocumentStatus::parse(&status).map(|status| DocumentRecord { name, status })
            })
            .collect())
    }

    async fn pending(&self) -> Result<Vec<PendingDocument>, StoreError> {
        let rows: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT name, doc_type, content FROM documents WHERE status = ? ORDER BY name",
        )
        .bind(DocumentStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(name, doc_type, content)| {
                DocumentType::parse(&doc_type).map(|doc_type| PendingDocument {
                    name,
                    doc_type,
                    content,
                })
            })
            .collect())
    }

    async fn complete(&self, name: &str, html: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE documents SET html = ?, status = ? WHERE name = ?")
            .bind(html)
            .bind(DocumentStatus::Rendered.as_str())
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(name.to_owned()));
        }
        Ok(())
    }

    async fn html(&self, name: &str) -> Result<Option<String>, StoreError> {
        let html: Option<Option<String>> =
            sqlx::query_scalar("SELECT html FROM documents WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(html.flatten())
    }
}
