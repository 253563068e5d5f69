//! `mdpress serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use mdpress_config::{CliSettings, Config};
use mdpress_server::{ServerConfig, run_server};
use mdpress_storage::{DocumentStore, SqliteStore};
use mdpress_worker::RenderWorker;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mdpress.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database path (overrides config).
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Render worker polling period in seconds (overrides config).
    #[arg(long)]
    period: Option<u64>,

    /// Enable verbose output (show render and request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            db_path: self.database,
            period_secs: self.period,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.validate()?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Database: {}", config.storage.path.display()));
        output.info(&format!(
            "Render period: {}s",
            config.worker.period_secs
        ));

        // Open the store and start the render worker
        let store = Arc::new(SqliteStore::connect(&config.storage.path).await?);
        let worker_store: Arc<dyn DocumentStore> = Arc::clone(&store) as Arc<dyn DocumentStore>;
        let worker = RenderWorker::new(
            worker_store,
            Duration::from_secs(config.worker.period_secs),
        )
        .spawn();

        // Run the server until shutdown
        let server_config = ServerConfig {
            host: config.server.host,
            port: config.server.port,
        };
        let result = run_server(server_config, store)
            .await
            .map_err(|err| CliError::Server(err.to_string()));

        worker.stop().await;
        result
    }
}
