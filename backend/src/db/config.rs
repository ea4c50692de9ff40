//! SQL Server connection settings.

use std::env;

use serde::{Deserialize, Serialize};

use super::source::{SourceError, SourceResult};

/// Connection settings for the SQL Server order database.
///
/// Either `connection_string` (ADO.NET style) or the individual fields are
/// used; the connection string wins when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MssqlConfig {
    /// ADO.NET connection string, e.g.
    /// `server=tcp:localhost,1433;database=AdventureWorks;user=sa;password=...`
    pub connection_string: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Whether to trust the server certificate
    pub trust_cert: bool,
    pub connect_timeout_secs: u64,
}

impl Default for MssqlConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            host: "localhost".to_string(),
            port: 1433,
            database: "AdventureWorks".to_string(),
            username: None,
            password: None,
            trust_cert: true,
            connect_timeout_secs: 30,
        }
    }
}

impl MssqlConfig {
    /// Build a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MSSQL_CONNECTION_STRING` (optional): ADO.NET connection string
    /// - `DB_SERVER` (optional, default: localhost)
    /// - `DB_PORT` (optional, default: 1433)
    /// - `DB_DATABASE` (optional, default: AdventureWorks)
    /// - `DB_USERNAME` / `DB_PASSWORD` (optional): SQL login
    /// - `DB_TRUST_CERT` (optional, default: true)
    pub fn from_env() -> SourceResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay any set environment variables onto this configuration.
    pub fn apply_env(&mut self) -> SourceResult<()> {
        if let Ok(conn) = env::var("MSSQL_CONNECTION_STRING") {
            self.connection_string = Some(conn);
        }
        if let Ok(host) = env::var("DB_SERVER") {
            self.host = host;
        }
        if let Ok(port) = env::var("DB_PORT") {
            self.port = port
                .parse()
                .map_err(|_| SourceError::configuration("DB_PORT must be a valid port number"))?;
        }
        if let Ok(database) = env::var("DB_DATABASE") {
            self.database = database;
        }
        if let Ok(username) = env::var("DB_USERNAME") {
            self.username = Some(username);
        }
        if let Ok(password) = env::var("DB_PASSWORD") {
            self.password = Some(password);
        }
        if let Ok(trust) = env::var("DB_TRUST_CERT") {
            self.trust_cert = trust.parse().map_err(|_| {
                SourceError::configuration("DB_TRUST_CERT must be true or false")
            })?;
        }
        Ok(())
    }

    /// Check that enough is set to attempt a connection.
    pub fn validate(&self) -> SourceResult<()> {
        if self.connection_string.is_some() {
            return Ok(());
        }
        if self.host.is_empty() || self.database.is_empty() {
            return Err(SourceError::configuration(
                "mssql source requires either connection_string or host and database",
            ));
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(SourceError::configuration(
                "mssql username and password must be set together",
            ));
        }
        Ok(())
    }

    /// Target description without credentials, for logs.
    pub fn target(&self) -> String {
        match &self.connection_string {
            Some(_) => "mssql (connection string)".to_string(),
            None => format!("mssql://{}:{}/{}", self.host, self.port, self.database),
        }
    }
}
