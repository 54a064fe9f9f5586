//! Bootstrap configuration loading
//!
//! Settings are read once at startup; changing them requires a restart.
//!
//! # Sources, highest priority first
//!
//! 1. Command-line arguments (applied by the binary via [`TomlConfig::apply_overrides`])
//! 2. TOML configuration file
//! 3. Compiled defaults
//!
//! The configuration file itself is located by: explicit path, then the
//! `CDASH_CONFIG` environment variable, then `<config dir>/cdash/config.toml`.
//! A missing file is not an error; defaults are used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "CDASH_CONFIG";

/// Default catalog file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "netflix_titles.csv";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Catalog CSV file (relative or absolute)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// HTTP bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5730
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values given on the command line; `None` leaves the file/default value alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Locate and load the configuration file, falling back to defaults.
    ///
    /// An explicitly named file (argument or environment) must exist and parse.
    /// The platform default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading config: {}", path.display());
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            info!("Loading config from {}: {}", CONFIG_ENV_VAR, path.display());
            return Self::from_file(&path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                info!("Loading config: {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                warn!("No config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line values on top of this configuration
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(data_file) = overrides.data_file {
            self.data_file = data_file;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self
    }

    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Platform configuration file location (`~/.config/cdash/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cdash").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();
        assert_eq!(config.data_file, PathBuf::from("netflix_titles.csv"));
        assert_eq!(config.port, 5730);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_address(), "127.0.0.1:5730");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = TomlConfig::from_toml_str("port = 8080\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_full_toml() {
        let config = TomlConfig::from_toml_str(
            r#"
data_file = "/srv/catalog/titles.csv"
host = "0.0.0.0"
port = 9000

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/srv/catalog/titles.csv"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("port = \"not a number\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = TomlConfig::default().apply_overrides(Overrides {
            data_file: Some(PathBuf::from("other.csv")),
            port: Some(6000),
            ..Default::default()
        });
        assert_eq!(config.data_file, PathBuf::from("other.csv"));
        assert_eq!(config.port, 6000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }
}
