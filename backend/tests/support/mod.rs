#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use rust_decimal::Decimal;
use sales_dashboard::models::{OrderId, OrderLine, SalesTable};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Environment variables read by `DashboardConfig::apply_env`, all unset.
pub const CLEAN_ENV: &[(&str, Option<&str>)] = &[
    ("HOST", None),
    ("PORT", None),
    ("SOURCE_TYPE", None),
    ("LOCAL_FIXTURE_PATH", None),
    ("MSSQL_CONNECTION_STRING", None),
    ("DB_SERVER", None),
    ("DB_PORT", None),
    ("DB_DATABASE", None),
    ("DB_USERNAME", None),
    ("DB_PASSWORD", None),
    ("DB_TRUST_CERT", None),
];

pub fn line(
    order_id: i32,
    date: &str,
    region: &str,
    product: &str,
    quantity: i64,
    unit_price: i64,
) -> OrderLine {
    OrderLine::new(
        OrderId::new(order_id),
        date.parse().expect("valid test date"),
        region,
        product,
        quantity,
        Decimal::from(unit_price),
    )
    .expect("valid test line")
}

/// Three lines over two regions, two products and two months.
///
/// West/Widget 20 in 2013-01, East/Widget 10 and West/Gadget 15 in 2013-02.
pub fn west_east_lines() -> Vec<OrderLine> {
    vec![
        line(43659, "2013-01-05", "West", "Widget", 2, 10),
        line(43660, "2013-02-10", "East", "Widget", 1, 10),
        line(43661, "2013-02-15", "West", "Gadget", 3, 5),
    ]
}

pub fn west_east_table() -> SalesTable {
    SalesTable::new(west_east_lines())
}

/// Lines over real US states plus one region without a state code.
pub fn state_lines() -> Vec<OrderLine> {
    vec![
        line(1, "2013-03-01", "Texas", "Widget", 1, 100),
        line(1, "2013-03-01", "Texas", "Gadget", 2, 25),
        line(2, "2013-04-12", "California", "Widget", 1, 100),
        line(3, "2013-04-20", "Ontario", "Gadget", 4, 25),
    ]
}
