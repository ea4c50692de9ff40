//! User-chosen filters for one render cycle.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::order::OrderLine;

/// Inclusive date range plus optional product and region allow-lists.
///
/// An empty set means "no restriction" for that dimension. The three clauses
/// are always combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub products: BTreeSet<String>,
    #[serde(default)]
    pub regions: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria covering `[start, end]` with no product or region restriction.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            products: BTreeSet::new(),
            regions: BTreeSet::new(),
        }
    }

    /// Criteria that admit every row regardless of date.
    pub fn unbounded() -> Self {
        Self::between(NaiveDate::MIN, NaiveDate::MAX)
    }

    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, line: &OrderLine) -> bool {
        let date = line.order_date();
        date >= self.start
            && date <= self.end
            && (self.products.is_empty() || self.products.contains(line.product_name()))
            && (self.regions.is_empty() || self.regions.contains(line.region_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderId;
    use rust_decimal::Decimal;

    fn line(date: &str, region: &str, product: &str) -> OrderLine {
        OrderLine::new(
            OrderId::new(1),
            date.parse().unwrap(),
            region,
            product,
            1,
            Decimal::ONE,
        )
        .unwrap()
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let c = FilterCriteria::between("2013-01-05".parse().unwrap(), "2013-02-10".parse().unwrap());

        assert!(c.matches(&line("2013-01-05", "West", "Widget")));
        assert!(c.matches(&line("2013-02-10", "West", "Widget")));
        assert!(!c.matches(&line("2013-01-04", "West", "Widget")));
        assert!(!c.matches(&line("2013-02-11", "West", "Widget")));
    }

    #[test]
    fn test_empty_sets_do_not_restrict() {
        let c = FilterCriteria::unbounded();
        assert!(c.matches(&line("2013-01-05", "Anywhere", "Anything")));
    }

    #[test]
    fn test_clauses_are_anded() {
        let c = FilterCriteria::unbounded()
            .with_products(["Widget"])
            .with_regions(["West"]);

        assert!(c.matches(&line("2013-01-05", "West", "Widget")));
        assert!(!c.matches(&line("2013-01-05", "East", "Widget")));
        assert!(!c.matches(&line("2013-01-05", "West", "Gadget")));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let c = FilterCriteria::between("2013-03-01".parse().unwrap(), "2013-01-01".parse().unwrap());
        assert!(!c.matches(&line("2013-02-01", "West", "Widget")));
    }
}
