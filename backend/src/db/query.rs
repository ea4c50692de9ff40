//! The fixed order-line query.
//!
//! Five-way join across order header, order detail, product, ship-to address
//! and state/province. Column types are cast so every driver sees plain
//! `INT`, `DATE`, `NVARCHAR` and `DECIMAL(19,4)` values.

pub const COL_ORDER_ID: &str = "SalesOrderID";
pub const COL_ORDER_DATE: &str = "OrderDate";
pub const COL_REGION_NAME: &str = "RegionName";
pub const COL_PRODUCT_NAME: &str = "ProductName";
pub const COL_QUANTITY: &str = "OrderQty";
pub const COL_UNIT_PRICE: &str = "UnitPrice";
/// Projected for completeness; the loader recomputes it from quantity and price.
pub const COL_LINE_VALUE: &str = "TotalItemValue";

pub const ORDER_LINES_QUERY: &str = r#"
SELECT
    soh.SalesOrderID                                  AS SalesOrderID,
    CAST(soh.OrderDate AS DATE)                       AS OrderDate,
    sp.Name                                           AS RegionName,
    p.Name                                            AS ProductName,
    CAST(sod.OrderQty AS INT)                         AS OrderQty,
    CAST(sod.UnitPrice AS DECIMAL(19, 4))             AS UnitPrice,
    CAST(sod.OrderQty * sod.UnitPrice AS DECIMAL(19, 4)) AS TotalItemValue
FROM
    Sales.SalesOrderHeader AS soh
JOIN
    Sales.SalesOrderDetail AS sod ON soh.SalesOrderID = sod.SalesOrderID
JOIN
    Production.Product AS p ON sod.ProductID = p.ProductID
JOIN
    Person.Address AS addr ON soh.ShipToAddressID = addr.AddressID
JOIN
    Person.StateProvince AS sp ON addr.StateProvinceID = sp.StateProvinceID
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_joins_five_tables() {
        assert_eq!(ORDER_LINES_QUERY.matches("JOIN").count(), 4);
        for table in [
            "Sales.SalesOrderHeader",
            "Sales.SalesOrderDetail",
            "Production.Product",
            "Person.Address",
            "Person.StateProvince",
        ] {
            assert!(ORDER_LINES_QUERY.contains(table), "missing {}", table);
        }
    }

    #[test]
    fn test_query_projects_every_column() {
        for col in [
            COL_ORDER_ID,
            COL_ORDER_DATE,
            COL_REGION_NAME,
            COL_PRODUCT_NAME,
            COL_QUANTITY,
            COL_UNIT_PRICE,
            COL_LINE_VALUE,
        ] {
            assert!(
                ORDER_LINES_QUERY.contains(&format!("AS {}", col)),
                "missing column {}",
                col
            );
        }
    }
}
