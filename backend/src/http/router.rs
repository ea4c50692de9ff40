//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/filters", get(handlers::get_filters))
        .route(
            "/dashboard",
            get(handlers::get_dashboard).post(handlers::post_dashboard),
        );

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySettings;
    use crate::models::SalesTable;
    use crate::session::Session;

    #[test]
    fn test_router_creation() {
        let session = Session::from_table("test", SalesTable::default());
        let state = AppState::new(session, DisplaySettings::default());
        let _router = create_router(state);
    }
}
