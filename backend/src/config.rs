//! Dashboard configuration file support.
//!
//! Settings come from `dashboard.toml` (when present) and are then overridden
//! by environment variables. A missing file means defaults: local source,
//! listening on `0.0.0.0:8080`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::{MssqlConfig, SourceType};

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    pub mssql: MssqlConfig,
    pub local: LocalSettings,
    pub display: DisplaySettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

/// Settings for the in-memory source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSettings {
    /// JSON array of order line records to serve.
    pub fixture_path: Option<PathBuf>,
}

/// Presentation settings handed to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub page_title: String,
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_title: "Sales Dashboard".to_string(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Relative fixture paths are relative to the file that names them.
        if let (Some(fixture), Some(dir)) = (config.local.fixture_path.as_mut(), path.parent()) {
            if fixture.is_relative() {
                *fixture = dir.join(&*fixture);
            }
        }
        Ok(config)
    }

    /// Load `dashboard.toml` from the first standard location that has one.
    ///
    /// Searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns defaults when none exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::info!("No dashboard.toml found, using defaults");
        Ok(Self::default())
    }

    /// Default-location file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: listener address
    /// - `SOURCE_TYPE`: `mssql` or `local`
    /// - `LOCAL_FIXTURE_PATH`: JSON fixture for the local source
    /// - `MSSQL_CONNECTION_STRING`, `DB_SERVER`, `DB_PORT`, `DB_DATABASE`,
    ///   `DB_USERNAME`, `DB_PASSWORD`, `DB_TRUST_CERT`: SQL Server settings
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Ok(source_type) = env::var("SOURCE_TYPE") {
            self.source.source_type =
                source_type
                    .parse()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: "SOURCE_TYPE".to_string(),
                        message,
                    })?;
        }
        if let Ok(path) = env::var("LOCAL_FIXTURE_PATH") {
            self.local.fixture_path = Some(PathBuf::from(path));
        }
        self.mssql
            .apply_env()
            .map_err(|e| ConfigError::InvalidValue {
                key: "mssql".to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}
