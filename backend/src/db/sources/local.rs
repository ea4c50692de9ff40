//! In-memory local order source.
//!
//! Holds order lines in memory, optionally seeded from a JSON fixture file.
//! Suitable for unit tests and for running the dashboard without a database.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;

use crate::db::source::{ErrorContext, OrderSource, SourceError, SourceResult};
use crate::models::OrderLine;

/// In-memory order source.
///
/// # Example
/// ```
/// use sales_dashboard::db::sources::LocalSource;
///
/// let source = LocalSource::new();
/// assert_eq!(source.line_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalSource {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    lines: Vec<OrderLine>,
    origin: Option<PathBuf>,
    is_healthy: bool,
}

impl LocalSource {
    /// Create an empty local source.
    pub fn new() -> Self {
        Self::with_lines(Vec::new())
    }

    /// Create a local source serving the given lines.
    pub fn with_lines(lines: Vec<OrderLine>) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                lines,
                origin: None,
                is_healthy: true,
            })),
        }
    }

    /// Read a JSON array of order line records.
    ///
    /// Each record carries `order_id`, `order_date`, `region_name`,
    /// `product_name`, `quantity` and `unit_price`; any `line_value` present
    /// is ignored and recomputed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let path = path.as_ref();
        let context = || {
            ErrorContext::new("read_fixture")
                .with_source("local")
                .with_location(path.display())
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            SourceError::ConfigurationError {
                message: format!("Failed to read fixture file: {}", e),
                context: context(),
            }
        })?;

        let lines: Vec<OrderLine> = serde_json::from_str(&content).map_err(|e| {
            let message = format!("Failed to parse fixture file: {}", e);
            match e.classify() {
                serde_json::error::Category::Data => {
                    SourceError::validation_with_context(message, context())
                }
                _ => SourceError::ConfigurationError {
                    message,
                    context: context(),
                },
            }
        })?;

        info!("Read {} order lines from {}", lines.len(), path.display());
        let source = Self::with_lines(lines);
        source.data.write().origin = Some(path.to_path_buf());
        Ok(source)
    }

    /// Append a line to the served table.
    pub fn push_line(&self, line: OrderLine) {
        self.data.write().lines.push(line);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    pub fn line_count(&self) -> usize {
        self.data.read().lines.len()
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderSource for LocalSource {
    async fn load(&self) -> SourceResult<Vec<OrderLine>> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(SourceError::connection_with_context(
                "Local source is not healthy",
                ErrorContext::new("load").with_source("local"),
            ));
        }
        debug!("Local source serving {} order lines", data.lines.len());
        Ok(data.lines.clone())
    }

    fn describe(&self) -> String {
        match &self.data.read().origin {
            Some(path) => format!("local ({})", path.display()),
            None => "local (in-memory)".to_string(),
        }
    }
}
