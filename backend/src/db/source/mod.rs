//! Order source trait definitions.
//!
//! An [`OrderSource`] is the opaque tabular-data collaborator: it runs the one
//! fixed join and hands back the full result set. No pagination, no
//! parameters, no write path.

pub mod error;

pub use error::{ErrorContext, SourceError, SourceResult};

use async_trait::async_trait;

use crate::models::OrderLine;

/// Source of the order line table.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Load every order line item.
    ///
    /// # Returns
    /// * `Ok(Vec<OrderLine>)` - The full result set, one entry per line item
    /// * `Err(SourceError)` - Connection, query or row validation failure
    async fn load(&self) -> SourceResult<Vec<OrderLine>>;

    /// Short human-readable description of where rows come from.
    fn describe(&self) -> String;
}
