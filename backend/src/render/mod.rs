//! Dashboard presentation.
//!
//! Turns an [`AggregateResult`] into everything the page draws: the page
//! configuration, sidebar widgets, KPI cards, highlight panels and the three
//! chart figures. Nothing here touches the loader or recomputes aggregates.

pub mod charts;
pub mod format;
pub mod page;
pub mod panels;
pub mod widgets;

use serde::Serialize;
use serde_json::Value;

use crate::config::DisplaySettings;
use crate::models::{AggregateResult, FilterCriteria, SalesTable};
use crate::services::build_report;

pub use charts::{dashboard_charts, ChartSeries, ChartSpec};
pub use format::{format_count, format_currency, wrap_text};
pub use page::{page_config, PageConfig, Theme, DEFAULT_THEME};
pub use panels::{highlights, kpi_displays, Highlight, KpiDisplay, PRODUCT_WRAP_WIDTH};
pub use widgets::{filter_widgets, FilterWidget, DATE_FORMAT};

/// A chart spec together with the plotly figure built from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    #[serde(flatten)]
    pub spec: ChartSpec,
    pub figure: Value,
}

impl From<ChartSpec> for RenderedChart {
    fn from(spec: ChartSpec) -> Self {
        let figure = spec.to_plotly();
        Self { spec, figure }
    }
}

/// One full render of the dashboard for a set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub page: PageConfig,
    pub filters: Vec<FilterWidget>,
    pub criteria: FilterCriteria,
    /// True when no line matched. Charts are still present with empty series.
    pub empty: bool,
    pub kpis: Vec<KpiDisplay>,
    pub highlights: Vec<Highlight>,
    pub charts: Vec<RenderedChart>,
    pub report: AggregateResult,
}

/// Aggregate `table` under `criteria` and lay the result out for display.
pub fn build_dashboard(
    table: &SalesTable,
    criteria: &FilterCriteria,
    display: &DisplaySettings,
) -> DashboardView {
    let report = build_report(table, criteria);
    render_report(table, criteria, report, display)
}

/// Lay out an already computed report.
pub fn render_report(
    table: &SalesTable,
    criteria: &FilterCriteria,
    report: AggregateResult,
    display: &DisplaySettings,
) -> DashboardView {
    let symbol = display.currency_symbol.as_str();
    let charts = dashboard_charts(&report, symbol)
        .into_iter()
        .map(RenderedChart::from)
        .collect();

    DashboardView {
        page: page_config(display),
        filters: filter_widgets(table, criteria),
        criteria: criteria.clone(),
        empty: report.is_empty(),
        kpis: kpi_displays(&report.kpis, symbol),
        highlights: highlights(&report),
        charts,
        report,
    }
}
