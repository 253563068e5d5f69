//! HTTP server for the mdpress publishing engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `POST /upload` - multipart document upload
//! - `GET /posts/{name}` - rendered post page (or render status)
//! - `GET /` - JSON listing of documents and their statuses
//!
//! The server never renders documents itself: uploads land in the store in
//! the pending state and the background render worker picks them up. While a
//! document is pending, `GET /posts/{name}` answers with a plain
//! "still rendering" body.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use mdpress_server::{ServerConfig, run_server};
//! use mdpress_storage::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(SqliteStore::connect("mdpress.db".as_ref()).await.unwrap());
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8080,
//!     };
//!     run_server(config, store).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use mdpress_storage::DocumentStore;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `store` - Shared document store
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    store: Arc<dyn DocumentStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { store });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
