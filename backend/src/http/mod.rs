//! HTTP server module for the sales dashboard.
//!
//! Exposes the dashboard page and its JSON view over axum. Handlers read the
//! session table from [`AppState`] and call straight into the report engine
//! and render layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Filter request parsing                                 │
//! │  - JSON serialization, CORS, compression, errors          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Render + Report Engine (render/, services/)              │
//! │  - Filtering, KPIs, breakdowns, chart specs               │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Session (loaded once from db/ at startup)                │
//! │  - MssqlSource / LocalSource                              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
