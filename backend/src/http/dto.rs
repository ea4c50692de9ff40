//! Data Transfer Objects for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FilterCriteria, SalesTable};

/// Request body for `POST /v1/dashboard`.
///
/// Missing dates fall back to the table's earliest and latest order dates.
/// Empty product or region lists mean no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
}

impl FilterRequest {
    pub fn into_criteria(self, table: &SalesTable) -> FilterCriteria {
        let defaults = table.default_criteria();
        FilterCriteria::between(
            self.start.unwrap_or(defaults.start),
            self.end.unwrap_or(defaults.end),
        )
        .with_products(self.products)
        .with_regions(self.regions)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Data load status: `loaded (N rows)` or `error: ...`
    pub data: String,
    /// Where the data came from
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderId, OrderLine};
    use rust_decimal::Decimal;

    fn table() -> SalesTable {
        SalesTable::new(vec![
            OrderLine::new(
                OrderId::new(1),
                "2012-03-01".parse().unwrap(),
                "Texas",
                "Widget",
                1,
                Decimal::ONE,
            )
            .unwrap(),
            OrderLine::new(
                OrderId::new(2),
                "2013-09-30".parse().unwrap(),
                "Ohio",
                "Gadget",
                1,
                Decimal::ONE,
            )
            .unwrap(),
        ])
    }

    #[test]
    fn test_empty_request_is_default_criteria() {
        let table = table();
        let criteria = FilterRequest::default().into_criteria(&table);
        assert_eq!(criteria, table.default_criteria());
    }

    #[test]
    fn test_request_overrides() {
        let request: FilterRequest =
            serde_json::from_str(r#"{"start": "2013-01-01", "regions": ["Ohio"]}"#).unwrap();
        let criteria = request.into_criteria(&table());

        assert_eq!(criteria.start.to_string(), "2013-01-01");
        assert_eq!(criteria.end.to_string(), "2013-09-30");
        assert!(criteria.products.is_empty());
        assert!(criteria.regions.contains("Ohio"));
    }
}
