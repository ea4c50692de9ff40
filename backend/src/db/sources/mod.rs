//! Order source implementations:
//! - `mssql`: SQL Server implementation with tiberius
//! - `local`: In-memory implementation for unit testing and local development
pub mod local;
#[cfg(feature = "mssql-repo")]
pub mod mssql;

pub use local::LocalSource;
#[cfg(feature = "mssql-repo")]
pub use mssql::MssqlSource;
