//! SQL Server order source.
//!
//! Opens one connection per load, runs the fixed order-line query and
//! decodes every row into an [`OrderLine`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use tiberius::{AuthMethod, Client, Config, Row};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::db::config::MssqlConfig;
use crate::db::query::{
    COL_ORDER_DATE, COL_ORDER_ID, COL_PRODUCT_NAME, COL_QUANTITY, COL_REGION_NAME,
    COL_UNIT_PRICE, ORDER_LINES_QUERY,
};
use crate::db::source::{ErrorContext, OrderSource, SourceError, SourceResult};
use crate::models::{OrderId, OrderLine};

type DbClient = Client<Compat<TcpStream>>;

/// Order source backed by the AdventureWorks schema on SQL Server.
pub struct MssqlSource {
    config: MssqlConfig,
}

impl MssqlSource {
    pub fn new(config: MssqlConfig) -> SourceResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn tiberius_config(&self) -> SourceResult<Config> {
        if let Some(conn) = &self.config.connection_string {
            return Config::from_ado_string(conn).map_err(|e| {
                SourceError::configuration(format!("Invalid connection string: {}", e))
            });
        }

        let mut config = Config::new();
        config.host(&self.config.host);
        config.port(self.config.port);
        config.database(&self.config.database);
        if let (Some(user), Some(password)) = (&self.config.username, &self.config.password) {
            config.authentication(AuthMethod::sql_server(user, password));
        }
        if self.config.trust_cert {
            config.trust_cert();
        }
        Ok(config)
    }

    async fn connect(&self) -> SourceResult<DbClient> {
        let config = self.tiberius_config()?;
        let timeout = Duration::from_secs(self.config.connect_timeout_secs);
        let context = || ErrorContext::new("connect").with_source(self.config.target());

        let tcp = tokio::time::timeout(timeout, TcpStream::connect(config.get_addr()))
            .await
            .map_err(|_| {
                SourceError::connection_with_context(
                    format!("Timed out after {}s", timeout.as_secs()),
                    context(),
                )
            })?
            .map_err(|e| SourceError::connection_with_context(e.to_string(), context()))?;
        tcp.set_nodelay(true)
            .map_err(|e| SourceError::connection_with_context(e.to_string(), context()))?;

        let client = Client::connect(config, tcp.compat_write())
            .await
            .map_err(|e| SourceError::from(e).with_operation("connect"))?;
        debug!("Connected to {}", self.config.target());
        Ok(client)
    }
}

#[async_trait]
impl OrderSource for MssqlSource {
    async fn load(&self) -> SourceResult<Vec<OrderLine>> {
        let mut client = self.connect().await?;

        let rows = client
            .simple_query(ORDER_LINES_QUERY)
            .await
            .map_err(|e| SourceError::from(e).with_operation("load_order_lines"))?
            .into_first_result()
            .await
            .map_err(|e| SourceError::from(e).with_operation("load_order_lines"))?;

        let lines = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| decode_row(idx, row))
            .collect::<SourceResult<Vec<_>>>()?;

        info!(
            "Loaded {} order lines from {}",
            lines.len(),
            self.config.target()
        );
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.config.target()
    }
}

fn decode_row(idx: usize, row: &Row) -> SourceResult<OrderLine> {
    let order_id: i32 = required(idx, row, COL_ORDER_ID)?;
    let order_date: NaiveDate = required(idx, row, COL_ORDER_DATE)?;
    let region_name: &str = required(idx, row, COL_REGION_NAME)?;
    let product_name: &str = required(idx, row, COL_PRODUCT_NAME)?;
    let quantity: i32 = required(idx, row, COL_QUANTITY)?;
    let unit_price: Decimal = required(idx, row, COL_UNIT_PRICE)?;

    OrderLine::new(
        OrderId::new(order_id),
        order_date,
        region_name,
        product_name,
        i64::from(quantity),
        unit_price,
    )
    .map_err(|e| {
        SourceError::validation_with_context(
            e.to_string(),
            ErrorContext::new("decode_row")
                .with_source("mssql")
                .with_location(format!("row {}", idx)),
        )
    })
}

/// Read a non-NULL column; NULLs and type mismatches are schema errors.
fn required<'a, T>(idx: usize, row: &'a Row, column: &str) -> SourceResult<T>
where
    T: tiberius::FromSql<'a>,
{
    let context = || {
        ErrorContext::new("decode_row")
            .with_source("mssql")
            .with_location(format!("row {} column {}", idx, column))
    };
    row.try_get::<T, _>(column)
        .map_err(|e| SourceError::query_with_context(e.to_string(), context()))?
        .ok_or_else(|| SourceError::query_with_context("unexpected NULL", context()))
}
