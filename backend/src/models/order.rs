//! Order line items as loaded from the order-management schema.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

crate::define_id_type!(i32, OrderId);

/// Reasons an incoming row cannot become an [`OrderLine`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrderLine {
    #[error("order {order_id}: quantity must be positive, got {quantity}")]
    NonPositiveQuantity { order_id: OrderId, quantity: i64 },

    #[error("order {order_id}: quantity {quantity} exceeds the supported maximum of {max}", max = u32::MAX)]
    QuantityOutOfRange { order_id: OrderId, quantity: i64 },

    #[error("order {order_id}: unit price must be positive, got {unit_price}")]
    NonPositiveUnitPrice {
        order_id: OrderId,
        unit_price: Decimal,
    },

    #[error("order {order_id}: {field} must not be empty")]
    EmptyField {
        order_id: OrderId,
        field: &'static str,
    },
}

/// One product line within a sales order.
///
/// `line_value` is always derived from `quantity * unit_price` when the line
/// is built; it is never taken from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderLineRecord")]
pub struct OrderLine {
    order_id: OrderId,
    order_date: NaiveDate,
    region_name: String,
    product_name: String,
    quantity: u32,
    unit_price: Decimal,
    line_value: Decimal,
}

/// Raw row shape accepted from fixtures and drivers.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRecord {
    pub order_id: i32,
    pub order_date: NaiveDate,
    pub region_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn new(
        order_id: OrderId,
        order_date: NaiveDate,
        region_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Result<Self, InvalidOrderLine> {
        let region_name = region_name.into();
        let product_name = product_name.into();

        if quantity <= 0 {
            return Err(InvalidOrderLine::NonPositiveQuantity { order_id, quantity });
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| InvalidOrderLine::QuantityOutOfRange { order_id, quantity })?;
        if unit_price <= Decimal::ZERO {
            return Err(InvalidOrderLine::NonPositiveUnitPrice {
                order_id,
                unit_price,
            });
        }
        if region_name.trim().is_empty() {
            return Err(InvalidOrderLine::EmptyField {
                order_id,
                field: "region_name",
            });
        }
        if product_name.trim().is_empty() {
            return Err(InvalidOrderLine::EmptyField {
                order_id,
                field: "product_name",
            });
        }

        Ok(Self {
            order_id,
            order_date,
            region_name,
            product_name,
            quantity,
            unit_price,
            line_value: Decimal::from(quantity) * unit_price,
        })
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn line_value(&self) -> Decimal {
        self.line_value
    }

    /// Calendar month the order falls in.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.order_date)
    }
}

impl TryFrom<OrderLineRecord> for OrderLine {
    type Error = InvalidOrderLine;

    fn try_from(record: OrderLineRecord) -> Result<Self, Self::Error> {
        OrderLine::new(
            OrderId::new(record.order_id),
            record.order_date,
            record.region_name,
            record.product_name,
            record.quantity,
            record.unit_price,
        )
    }
}

/// Year + month bucket used for the time series and the peak-month lookup.
///
/// Ordering is chronological.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Display label, `MM/YYYY`.
    pub fn label(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

/// Axis key, `YYYY-MM`.
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_line_value_is_derived() {
        let line = OrderLine::new(
            OrderId::new(43659),
            date(2011, 5, 31),
            "Georgia",
            "Mountain-100 Black, 42",
            3,
            Decimal::new(20249940, 4),
        )
        .unwrap();

        assert_eq!(line.line_value(), Decimal::new(60749820, 4));
        assert_eq!(line.quantity(), 3);
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let err = OrderLine::new(
            OrderId::new(1),
            date(2013, 1, 1),
            "Texas",
            "Widget",
            0,
            Decimal::ONE,
        )
        .unwrap_err();
        assert!(matches!(err, InvalidOrderLine::NonPositiveQuantity { .. }));
    }

    #[test]
    fn test_rejects_quantity_above_u32() {
        let too_many = i64::from(u32::MAX) + 1;
        let err = OrderLine::new(
            OrderId::new(7),
            date(2013, 1, 1),
            "Texas",
            "Widget",
            too_many,
            Decimal::ONE,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidOrderLine::QuantityOutOfRange {
                order_id: OrderId::new(7),
                quantity: too_many,
            }
        );
        assert!(err.to_string().contains("exceeds the supported maximum"));

        let err = OrderLine::new(
            OrderId::new(7),
            date(2013, 1, 1),
            "Texas",
            "Widget",
            -3,
            Decimal::ONE,
        )
        .unwrap_err();
        assert!(matches!(err, InvalidOrderLine::NonPositiveQuantity { quantity: -3, .. }));

        let line = OrderLine::new(
            OrderId::new(7),
            date(2013, 1, 1),
            "Texas",
            "Widget",
            i64::from(u32::MAX),
            Decimal::ONE,
        )
        .unwrap();
        assert_eq!(line.quantity(), u32::MAX);
    }

    #[test]
    fn test_order_id_is_a_bare_integer_on_the_wire() {
        let id = OrderId::from(43659);
        assert_eq!(serde_json::to_string(&id).unwrap(), "43659");
        assert_eq!(serde_json::from_str::<OrderId>("43659").unwrap(), id);
        assert_eq!(id.to_string(), "43659");
        assert_eq!(i32::from(id), 43659);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let err = OrderLine::new(
            OrderId::new(1),
            date(2013, 1, 1),
            "Texas",
            "Widget",
            2,
            Decimal::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, InvalidOrderLine::NonPositiveUnitPrice { .. }));
    }

    #[test]
    fn test_rejects_blank_product() {
        let err = OrderLine::new(
            OrderId::new(7),
            date(2013, 1, 1),
            "Texas",
            "  ",
            2,
            Decimal::ONE,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidOrderLine::EmptyField {
                order_id: OrderId::new(7),
                field: "product_name"
            }
        );
    }

    #[test]
    fn test_deserialize_ignores_upstream_line_value() {
        let json = r#"{
            "order_id": 5,
            "order_date": "2013-02-10",
            "region_name": "Ohio",
            "product_name": "Widget",
            "quantity": 4,
            "unit_price": "2.50",
            "line_value": "999"
        }"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.line_value(), Decimal::new(100, 1));
    }

    #[test]
    fn test_deserialize_rejects_invalid_row() {
        let json = r#"{
            "order_id": 5,
            "order_date": "2013-02-10",
            "region_name": "Ohio",
            "product_name": "Widget",
            "quantity": -1,
            "unit_price": "2.50"
        }"#;
        let err = serde_json::from_str::<OrderLine>(json).unwrap_err();
        assert!(err.to_string().contains("quantity must be positive"));
    }

    #[test]
    fn test_year_month_formatting_and_order() {
        let jan = YearMonth::from_date(date(2013, 1, 5));
        let feb = YearMonth::new(2013, 2).unwrap();
        let dec_prev = YearMonth::new(2012, 12).unwrap();

        assert_eq!(jan.to_string(), "2013-01");
        assert_eq!(feb.label(), "02/2013");
        assert!(dec_prev < jan && jan < feb);
        assert!(YearMonth::new(2013, 13).is_none());
        assert_eq!(serde_json::to_string(&feb).unwrap(), "\"2013-02\"");
    }
}
