//! Configuration management for mdpress.
//!
//! Parses `mdpress.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. All sections are
//! optional; missing values fall back to defaults.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [storage]
//! path = "mdpress.db"
//!
//! [worker]
//! period_secs = 5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdpress.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override database path.
    pub db_path: Option<PathBuf>,
    /// Override worker polling period in seconds.
    pub period_secs: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Render worker configuration.
    pub worker: WorkerConfig,
}

/// Server configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
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

/// Storage configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("mdpress.db"),
        }
    }
}

/// Render worker configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkerConfig {
    /// Polling period between render sweeps, in seconds.
    pub period_secs: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { period_secs: 5 }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `mdpress.toml` in the current directory and parents,
    /// falling back to defaults if none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host cannot be empty".into(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be between 1 and 65535".into(),
            ));
        }
        if self.worker.period_secs == 0 {
            return Err(ConfigError::Validation(
                "worker.period_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Search for `mdpress.toml` in the current directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(db_path) = &settings.db_path {
            self.storage.path.clone_from(db_path);
        }
        if let Some(period_secs) = settings.period_secs {
            self.worker.period_secs = period_secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.path, PathBuf::from("mdpress.db"));
        assert_eq!(config.worker.period_secs, 5);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [storage]
            path = "/var/lib/mdpress/posts.db"

            [worker]
            period_secs = 30
            "#,
        );

        let config = Config::load(Some(file.path()), None).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.storage.path,
            PathBuf::from("/var/lib/mdpress/posts.db")
        );
        assert_eq!(config.worker.period_secs, 30);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config("[server]\nport = 3000\n");

        let config = Config::load(Some(file.path()), None).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.worker.period_secs, 5);
    }

    #[test]
    fn test_cli_settings_override_file() {
        let file = write_config("[server]\nhost = \"0.0.0.0\"\nport = 3000\n");
        let settings = CliSettings {
            port: Some(4000),
            period_secs: Some(1),
            ..CliSettings::default()
        };

        let config = Config::load(Some(file.path()), Some(&settings)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.worker.period_secs, 1);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/mdpress.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let file = write_config("[server\nport=");
        let err = Config::load(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let mut config = Config::default();
        config.worker.period_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
