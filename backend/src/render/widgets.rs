//! Sidebar filter widgets.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{FilterCriteria, SalesTable};

pub const DATE_FORMAT: &str = "DD/MM/YYYY";

/// One sidebar input. `key` matches the field name of the filter request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FilterWidget {
    MultiSelect {
        key: &'static str,
        label: &'static str,
        options: Vec<String>,
        selected: Vec<String>,
    },
    DatePicker {
        key: &'static str,
        label: &'static str,
        value: Option<NaiveDate>,
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
        format: &'static str,
    },
}

/// Product and region multi-selects plus the two bounded date pickers.
///
/// Picker bounds are the earliest and latest order dates in the table; the
/// current values come from `criteria`.
pub fn filter_widgets(table: &SalesTable, criteria: &FilterCriteria) -> Vec<FilterWidget> {
    let bounds = table.date_bounds();
    let min = bounds.map(|b| b.earliest);
    let max = bounds.map(|b| b.latest);
    let shown = |date: NaiveDate| bounds.map(|_| date);

    vec![
        FilterWidget::MultiSelect {
            key: "products",
            label: "Product",
            options: table.products().to_vec(),
            selected: criteria.products.iter().cloned().collect(),
        },
        FilterWidget::MultiSelect {
            key: "regions",
            label: "Region",
            options: table.regions().to_vec(),
            selected: criteria.regions.iter().cloned().collect(),
        },
        FilterWidget::DatePicker {
            key: "start",
            label: "Start date",
            value: shown(criteria.start),
            min,
            max,
            format: DATE_FORMAT,
        },
        FilterWidget::DatePicker {
            key: "end",
            label: "End date",
            value: shown(criteria.end),
            min,
            max,
            format: DATE_FORMAT,
        },
    ]
}
