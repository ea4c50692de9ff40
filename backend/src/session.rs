//! Session-scoped ownership of the loaded order table.
//!
//! The loader runs exactly once per session. The resulting table is shared
//! read-only with every request; a failed load is kept as an explicit error
//! state so the dashboard can report it instead of showing empty charts.

use std::sync::Arc;

use log::{error, info};
use serde::Serialize;

use crate::db::{OrderSource, SourceError};
use crate::models::SalesTable;

/// Why the session has no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    /// Error class: connection, query, validation, configuration or internal.
    pub kind: String,
    pub message: String,
}

impl From<&SourceError> for LoadFailure {
    fn from(err: &SourceError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
enum SessionState {
    Ready(Arc<SalesTable>),
    Failed(LoadFailure),
}

/// One dashboard session: where the data came from and what was loaded.
#[derive(Debug, Clone)]
pub struct Session {
    source: String,
    state: SessionState,
}

impl Session {
    /// Run the source's load once and keep the outcome.
    pub async fn open(source: &dyn OrderSource) -> Self {
        let description = source.describe();
        let state = match source.load().await {
            Ok(lines) => {
                let table = SalesTable::new(lines);
                info!(
                    "Session ready: {} order lines, {} products, {} regions from {}",
                    table.len(),
                    table.products().len(),
                    table.regions().len(),
                    description
                );
                SessionState::Ready(Arc::new(table))
            }
            Err(e) => {
                error!("Failed to load order lines from {}: {}", description, e);
                SessionState::Failed(LoadFailure::from(&e))
            }
        };
        Self {
            source: description,
            state,
        }
    }

    /// Session over an already built table.
    pub fn from_table(source: impl Into<String>, table: SalesTable) -> Self {
        Self {
            source: source.into(),
            state: SessionState::Ready(Arc::new(table)),
        }
    }

    /// Session for a source that could not even be constructed.
    pub fn failed(source: impl Into<String>, err: &SourceError) -> Self {
        let source = source.into();
        error!("Order source {} unavailable: {}", source, err);
        Self {
            source,
            state: SessionState::Failed(LoadFailure::from(err)),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The loaded table, or the failure that prevented loading it.
    pub fn table(&self) -> Result<&Arc<SalesTable>, &LoadFailure> {
        match &self.state {
            SessionState::Ready(table) => Ok(table),
            SessionState::Failed(failure) => Err(failure),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalSource;
    use crate::models::{OrderId, OrderLine};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_open_loads_table() {
        let source = LocalSource::with_lines(vec![OrderLine::new(
            OrderId::new(1),
            "2013-01-05".parse().unwrap(),
            "Texas",
            "Widget",
            2,
            Decimal::TEN,
        )
        .unwrap()]);

        let session = Session::open(&source).await;
        assert!(session.is_ready());
        assert_eq!(session.table().unwrap().len(), 1);
        assert_eq!(session.source(), "local (in-memory)");
    }

    #[tokio::test]
    async fn test_open_keeps_failure() {
        let source = LocalSource::new();
        source.set_healthy(false);

        let session = Session::open(&source).await;
        assert!(!session.is_ready());
        let failure = session.table().unwrap_err();
        assert_eq!(failure.kind, "connection");
        assert!(failure.message.contains("not healthy"));
    }

    #[test]
    fn test_failed_session() {
        let err = SourceError::configuration("mssql-repo feature not enabled");
        let session = Session::failed("mssql", &err);
        assert!(!session.is_ready());
        assert_eq!(session.table().unwrap_err().kind, "configuration");
    }

    #[tokio::test]
    async fn test_empty_load_is_still_ready() {
        let session = Session::open(&LocalSource::new()).await;
        assert!(session.is_ready());
        assert!(session.table().unwrap().is_empty());
    }
}
