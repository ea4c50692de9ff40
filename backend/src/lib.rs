//! # Sales Dashboard Backend
//!
//! Interactive sales dashboard over the AdventureWorks order lines.
//!
//! The order lines are read once per session from SQL Server (or an
//! in-memory source), then every filter change re-runs a pure report over the
//! loaded table: filtering, KPIs, superlatives and the breakdowns behind the
//! three charts. The result is laid out as page, widget, KPI and plotly
//! figure data and served over a small axum API.
//!
//! ## Architecture
//!
//! - [`config`]: `dashboard.toml` plus environment overrides
//! - [`db`]: order sources (SQL Server via tiberius, local JSON/in-memory)
//! - [`models`]: order lines, the session table, criteria and aggregates
//! - [`services`]: the report engine
//! - [`render`]: page config, widgets, KPI cards and chart specs
//! - [`session`]: the once-loaded table or its load failure
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - SourceError carries context for debugging
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod models;
pub mod render;
pub mod services;
pub mod session;

#[cfg(feature = "http-server")]
pub mod http;
