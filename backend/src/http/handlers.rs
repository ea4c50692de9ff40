//! HTTP handlers for the dashboard API.
//!
//! Each handler borrows the session table and delegates to the render layer,
//! which runs the report engine for the requested criteria.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use tracing::{debug, warn};

use super::dto::{FilterRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::{FilterCriteria, SalesTable};
use crate::render::{build_dashboard, filter_widgets, DashboardView, FilterWidget};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

fn loaded_table(state: &AppState) -> Result<&SalesTable, AppError> {
    state.session.table().map(|t| t.as_ref()).map_err(|failure| {
        warn!(kind = %failure.kind, "Request rejected, order data not loaded");
        AppError::from(failure)
    })
}

fn render(state: &AppState, table: &SalesTable, criteria: &FilterCriteria) -> DashboardView {
    let view = build_dashboard(table, criteria, &state.display);
    debug!(
        matched = view.report.matched_lines,
        products = criteria.products.len(),
        regions = criteria.regions.len(),
        "Rendered dashboard"
    );
    view
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the session table loaded. Always 200 so the process can be
/// probed even when the database is down.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data = match state.session.table() {
        Ok(table) => format!("loaded ({} rows)", table.len()),
        Err(failure) => format!("error: {}", failure.message),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        data,
        source: state.session.source().to_string(),
    })
}

// =============================================================================
// Page
// =============================================================================

/// GET /
///
/// The dashboard page. It fetches its view from `/v1/dashboard`.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/filters
///
/// Sidebar widgets with their options and default values.
pub async fn get_filters(State(state): State<AppState>) -> HandlerResult<Vec<FilterWidget>> {
    let table = loaded_table(&state)?;
    Ok(Json(filter_widgets(table, &table.default_criteria())))
}

/// GET /v1/dashboard
///
/// The full view over the whole table.
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardView> {
    let table = loaded_table(&state)?;
    Ok(Json(render(&state, table, &table.default_criteria())))
}

/// POST /v1/dashboard
///
/// The full view for the posted filter selection.
pub async fn post_dashboard(
    State(state): State<AppState>,
    request: Result<Json<FilterRequest>, JsonRejection>,
) -> HandlerResult<DashboardView> {
    let table = loaded_table(&state)?;
    let Json(request) = request?;
    let criteria = request.into_criteria(table);
    Ok(Json(render(&state, table, &criteria)))
}
