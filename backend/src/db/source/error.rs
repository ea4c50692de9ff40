//! Error types for order source operations.
//!
//! Every variant here is a load failure: the session has no data to show and
//! must report the failure instead of rendering empty charts.

use std::fmt;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Structured context for source errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "connect", "load_order_lines")
    pub operation: Option<String>,
    /// The source involved (e.g., "mssql", "local")
    pub source: Option<String>,
    /// Column or row identifier if applicable
    pub location: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_location(mut self, location: impl ToString) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref source) = self.source {
            parts.push(format!("source={}", source));
        }
        if let Some(ref location) = self.location {
            parts.push(format!("at={}", location));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for loading order lines.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Database unreachable, TLS or login failure.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// Query execution failed or the result set did not match the expected schema.
    #[error("Query error: {message} {context}")]
    QueryError {
        message: String,
        context: ErrorContext,
    },

    /// A row violated the order line invariants.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Missing or invalid source configuration.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    #[error("Internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl SourceError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context,
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::QueryError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn query_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::QueryError {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::QueryError { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::InternalError { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::ConnectionError { context, .. }
            | Self::QueryError { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::InternalError { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }

    /// Short machine-readable kind, used in health and error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConnectionError { .. } => "connection",
            Self::QueryError { .. } => "query",
            Self::ValidationError { .. } => "validation",
            Self::ConfigurationError { .. } => "configuration",
            Self::InternalError { .. } => "internal",
        }
    }
}

impl From<crate::models::InvalidOrderLine> for SourceError {
    fn from(err: crate::models::InvalidOrderLine) -> Self {
        SourceError::validation(err.to_string())
    }
}

#[cfg(feature = "mssql-repo")]
impl From<tiberius::error::Error> for SourceError {
    fn from(err: tiberius::error::Error) -> Self {
        match err {
            tiberius::error::Error::Io { .. }
            | tiberius::error::Error::Tls(_)
            | tiberius::error::Error::Routing { .. } => SourceError::connection_with_context(
                err.to_string(),
                ErrorContext::default().with_source("mssql"),
            ),
            tiberius::error::Error::Server(ref token) => SourceError::query_with_context(
                token.message().to_string(),
                ErrorContext::default()
                    .with_source("mssql")
                    .with_details(format!("code={}", token.code())),
            ),
            other => SourceError::query_with_context(
                other.to_string(),
                ErrorContext::default().with_source("mssql"),
            ),
        }
    }
}
