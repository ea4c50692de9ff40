//! Order source factory.
//!
//! Creates the configured [`OrderSource`] at startup.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use super::source::{OrderSource, SourceError, SourceResult};
use super::sources::LocalSource;
#[cfg(feature = "mssql-repo")]
use super::sources::MssqlSource;
use crate::config::DashboardConfig;

/// Source type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// SQL Server via tiberius
    Mssql,
    /// In-memory local source
    #[default]
    Local,
}

impl FromStr for SourceType {
    type Err = String;

    /// Parse source type from string ("mssql", "sqlserver", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mssql => write!(f, "mssql"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Source factory for creating order source instances.
pub struct SourceFactory;

impl SourceFactory {
    /// Create the source selected by `config.source.source_type`.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn OrderSource>)` - Shared source instance
    /// * `Err(SourceError)` - If the configuration is unusable or the
    ///   backend feature is not compiled in
    pub fn create(config: &DashboardConfig) -> SourceResult<Arc<dyn OrderSource>> {
        let source: Arc<dyn OrderSource> = match config.source.source_type {
            SourceType::Mssql => {
                #[cfg(feature = "mssql-repo")]
                {
                    Arc::new(MssqlSource::new(config.mssql.clone())?)
                }
                #[cfg(not(feature = "mssql-repo"))]
                {
                    return Err(SourceError::configuration(
                        "mssql source feature not enabled",
                    ));
                }
            }
            SourceType::Local => match &config.local.fixture_path {
                Some(path) => Arc::new(LocalSource::from_json_file(path)?),
                None => Self::create_local(),
            },
        };
        info!("Order source: {}", source.describe());
        Ok(source)
    }

    /// Create an empty in-memory source.
    pub fn create_local() -> Arc<dyn OrderSource> {
        Arc::new(LocalSource::new())
    }
}
