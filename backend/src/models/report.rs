//! Aggregates computed from a filtered set of order lines.

use rust_decimal::Decimal;
use serde::Serialize;

use super::order::YearMonth;

/// Headline scalars over the filtered lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total_sales: Decimal,
    /// Distinct order ids.
    pub total_orders: usize,
    pub total_items: u64,
    /// `total_sales / total_orders`, exactly zero when there are no orders.
    pub average_order_value: Decimal,
}

impl Kpis {
    pub fn zero() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            total_orders: 0,
            total_items: 0,
            average_order_value: Decimal::ZERO,
        }
    }
}

/// Winning key of an argmax lookup and its summed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Superlative<K> {
    pub key: K,
    pub total: Decimal,
}

/// Summed line value for one product or region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedTotal {
    pub name: String,
    pub total: Decimal,
}

/// Summed line value for one US state, keyed by USPS code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateTotal {
    pub state_code: &'static str,
    pub region_name: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub month: YearMonth,
    pub total: Decimal,
}

/// Everything the dashboard shows for one set of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    /// Number of lines that passed the filter.
    pub matched_lines: usize,
    pub kpis: Kpis,
    pub best_selling_product: Option<Superlative<String>>,
    pub top_region: Option<Superlative<String>>,
    pub peak_month: Option<Superlative<YearMonth>>,
    /// Ascending by total, ties by name.
    pub sales_by_product: Vec<NamedTotal>,
    /// Region name order.
    pub sales_by_region: Vec<NamedTotal>,
    /// Regions with a state code only, state name order.
    pub sales_by_state: Vec<StateTotal>,
    /// Chronological.
    pub sales_by_month: Vec<MonthTotal>,
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.matched_lines == 0
    }
}
