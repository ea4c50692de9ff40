//! Data loading for the order line table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Session (session.rs) - loads once, owns the table      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  OrderSource trait (source/) - Abstract Interface       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴───────────────┐
//!     │                               │
//! ┌───▼──────────────┐     ┌──────────▼───────┐
//! │  MssqlSource     │     │  LocalSource     │
//! │  (tiberius)      │     │  (in-memory)     │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! `factory::SourceFactory` picks the implementation from configuration.

#[cfg(not(any(feature = "mssql-repo", feature = "local-repo")))]
compile_error!("Enable at least one order source feature.");

pub mod config;
pub mod factory;
pub mod query;
pub mod source;
pub mod sources;

pub use config::MssqlConfig;
pub use factory::{SourceFactory, SourceType};
pub use source::{ErrorContext, OrderSource, SourceError, SourceResult};
pub use sources::LocalSource;
#[cfg(feature = "mssql-repo")]
pub use sources::MssqlSource;
