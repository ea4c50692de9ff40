//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DisplaySettings;
use crate::session::Session;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded order table, or why it could not be loaded.
    pub session: Arc<Session>,
    pub display: Arc<DisplaySettings>,
}

impl AppState {
    pub fn new(session: Session, display: DisplaySettings) -> Self {
        Self {
            session: Arc::new(session),
            display: Arc::new(display),
        }
    }
}
