//! Headline KPIs.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{Kpis, OrderLine};

/// Total sales, distinct order count, item count and average order value.
///
/// With no orders the average is defined as zero rather than an error.
pub fn compute_kpis(lines: &[&OrderLine]) -> Kpis {
    let total_sales: Decimal = lines.iter().map(|l| l.line_value()).sum();
    let total_items: u64 = lines.iter().map(|l| u64::from(l.quantity())).sum();
    let total_orders = lines
        .iter()
        .map(|l| l.order_id())
        .collect::<HashSet<_>>()
        .len();

    let average_order_value = if total_orders > 0 {
        total_sales / Decimal::from(total_orders)
    } else {
        Decimal::ZERO
    };

    Kpis {
        total_sales,
        total_orders,
        total_items,
        average_order_value,
    }
}
