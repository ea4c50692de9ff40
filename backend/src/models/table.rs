//! The session's loaded order table.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::criteria::FilterCriteria;
use super::order::OrderLine;

/// Earliest and latest order date present in the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Full result of the load query, read-only once built.
///
/// Product and region names keep first-seen order so the filter widgets list
/// options the way rows arrived from the database.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    lines: Vec<OrderLine>,
    products: Vec<String>,
    regions: Vec<String>,
    date_bounds: Option<DateBounds>,
}

impl SalesTable {
    pub fn new(lines: Vec<OrderLine>) -> Self {
        let mut products = Vec::new();
        let mut regions = Vec::new();
        let mut seen_products = HashSet::new();
        let mut seen_regions = HashSet::new();
        let mut date_bounds: Option<DateBounds> = None;

        for line in &lines {
            if seen_products.insert(line.product_name()) {
                products.push(line.product_name().to_string());
            }
            if seen_regions.insert(line.region_name()) {
                regions.push(line.region_name().to_string());
            }
            let date = line.order_date();
            date_bounds = Some(match date_bounds {
                None => DateBounds {
                    earliest: date,
                    latest: date,
                },
                Some(b) => DateBounds {
                    earliest: b.earliest.min(date),
                    latest: b.latest.max(date),
                },
            });
        }

        Self {
            lines,
            products,
            regions,
            date_bounds,
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn date_bounds(&self) -> Option<DateBounds> {
        self.date_bounds
    }

    /// Whole date span of the table, no product or region restriction.
    pub fn default_criteria(&self) -> FilterCriteria {
        match self.date_bounds {
            Some(b) => FilterCriteria::between(b.earliest, b.latest),
            None => FilterCriteria::unbounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderId;
    use rust_decimal::Decimal;

    fn line(id: i32, date: &str, region: &str, product: &str) -> OrderLine {
        OrderLine::new(
            OrderId::new(id),
            date.parse().unwrap(),
            region,
            product,
            1,
            Decimal::TEN,
        )
        .unwrap()
    }

    #[test]
    fn test_options_keep_first_seen_order() {
        let table = SalesTable::new(vec![
            line(1, "2013-02-10", "Texas", "Widget"),
            line(2, "2013-01-05", "Ohio", "Gadget"),
            line(3, "2013-03-01", "Texas", "Widget"),
        ]);

        assert_eq!(table.products(), ["Widget", "Gadget"]);
        assert_eq!(table.regions(), ["Texas", "Ohio"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_date_bounds() {
        let table = SalesTable::new(vec![
            line(1, "2013-02-10", "Texas", "Widget"),
            line(2, "2013-01-05", "Ohio", "Gadget"),
        ]);

        let bounds = table.date_bounds().unwrap();
        assert_eq!(bounds.earliest, "2013-01-05".parse::<NaiveDate>().unwrap());
        assert_eq!(bounds.latest, "2013-02-10".parse::<NaiveDate>().unwrap());

        let criteria = table.default_criteria();
        assert_eq!(criteria.start, bounds.earliest);
        assert_eq!(criteria.end, bounds.latest);
        assert!(criteria.products.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = SalesTable::new(vec![]);
        assert!(table.is_empty());
        assert!(table.date_bounds().is_none());
        assert_eq!(table.default_criteria(), FilterCriteria::unbounded());
    }
}
