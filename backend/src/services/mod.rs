//! Report engine: filtering and aggregation over the loaded table.
//!
//! Everything here is a pure function of `(&SalesTable, &FilterCriteria)`;
//! no I/O, no shared state.

pub mod breakdowns;
pub mod filtering;
pub mod kpis;
pub mod report;
pub mod states;

pub use filtering::filter_lines;
pub use kpis::compute_kpis;
pub use report::{aggregate, build_report};
pub use states::{state_code, STATE_CODES};
