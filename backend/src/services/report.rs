//! The filter + aggregate pipeline.
//!
//! [`build_report`] is a pure function of the table and the criteria. It is
//! re-run from scratch for every filter change.

use log::debug;

use super::breakdowns::{
    argmax, month_series, named_totals, product_ranking, state_totals, sum_by_month,
    sum_by_product, sum_by_region,
};
use super::filtering::filter_lines;
use super::kpis::compute_kpis;
use crate::models::{AggregateResult, FilterCriteria, OrderLine, SalesTable};

/// Filter the table and compute every aggregate the dashboard shows.
pub fn build_report(table: &SalesTable, criteria: &FilterCriteria) -> AggregateResult {
    let filtered = filter_lines(table.lines(), criteria);
    debug!(
        "Filter {}..{} products={} regions={} matched {}/{} lines",
        criteria.start,
        criteria.end,
        criteria.products.len(),
        criteria.regions.len(),
        filtered.len(),
        table.len()
    );
    aggregate(&filtered)
}

/// Aggregates over an already filtered set of lines.
///
/// Superlatives are only computed when there is at least one line.
pub fn aggregate(lines: &[&OrderLine]) -> AggregateResult {
    let kpis = compute_kpis(lines);
    let by_product = sum_by_product(lines);
    let by_region = sum_by_region(lines);
    let by_month = sum_by_month(lines);

    AggregateResult {
        matched_lines: lines.len(),
        kpis,
        best_selling_product: argmax(&by_product),
        top_region: argmax(&by_region),
        peak_month: argmax(&by_month),
        sales_by_product: product_ranking(&by_product),
        sales_by_region: named_totals(&by_region),
        sales_by_state: state_totals(&by_region),
        sales_by_month: month_series(&by_month),
    }
}
