//! KPI cards and the sidebar highlight panels.

use serde::Serialize;

use super::format::{format_count, format_currency, wrap_text};
use crate::models::{AggregateResult, Kpis};

/// Column width used to wrap the best-selling product name.
pub const PRODUCT_WRAP_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiDisplay {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub key: &'static str,
    pub label: &'static str,
    /// Display lines; more than one when the value is wrapped.
    pub lines: Vec<String>,
}

pub fn kpi_displays(kpis: &Kpis, currency_symbol: &str) -> Vec<KpiDisplay> {
    vec![
        KpiDisplay {
            key: "total_sales",
            label: "Total Sales",
            value: format_currency(kpis.total_sales, currency_symbol),
        },
        KpiDisplay {
            key: "total_orders",
            label: "Total Orders",
            value: kpis.total_orders.to_string(),
        },
        KpiDisplay {
            key: "total_items",
            label: "Total Items",
            value: format_count(kpis.total_items),
        },
        KpiDisplay {
            key: "average_order_value",
            label: "Average Order Value",
            value: format_currency(kpis.average_order_value, currency_symbol),
        },
    ]
}

/// Superlative panels; empty when the filtered set is empty.
pub fn highlights(report: &AggregateResult) -> Vec<Highlight> {
    let mut panels = Vec::new();
    if let Some(product) = &report.best_selling_product {
        panels.push(Highlight {
            key: "best_selling_product",
            label: "Best-Selling Product",
            lines: wrap_text(&product.key, PRODUCT_WRAP_WIDTH),
        });
    }
    if let Some(region) = &report.top_region {
        panels.push(Highlight {
            key: "top_region",
            label: "Top Region",
            lines: vec![region.key.clone()],
        });
    }
    if let Some(month) = &report.peak_month {
        panels.push(Highlight {
            key: "peak_month",
            label: "Peak Sales Month",
            lines: vec![month.key.label()],
        });
    }
    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_kpi_labels_and_values() {
        let kpis = Kpis {
            total_sales: Decimal::new(10984711, 2),
            total_orders: 3,
            total_items: 1234,
            average_order_value: Decimal::new(3661570333, 5),
        };
        let cards = kpi_displays(&kpis, "R$");

        let values: Vec<(&str, &str)> =
            cards.iter().map(|c| (c.label, c.value.as_str())).collect();
        assert_eq!(
            values,
            [
                ("Total Sales", "R$109,847.11"),
                ("Total Orders", "3"),
                ("Total Items", "1,234"),
                ("Average Order Value", "R$36,615.70"),
            ]
        );
    }

    #[test]
    fn test_zero_kpis_render_as_zero() {
        let cards = kpi_displays(&Kpis::zero(), "$");
        assert_eq!(cards[0].value, "$0.00");
        assert_eq!(cards[3].value, "$0.00");
    }
}
