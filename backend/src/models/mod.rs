pub mod criteria;
pub mod macros;
pub mod order;
pub mod report;
pub mod table;

pub use criteria::FilterCriteria;
pub use order::{InvalidOrderLine, OrderId, OrderLine, OrderLineRecord, YearMonth};
pub use report::{AggregateResult, Kpis, MonthTotal, NamedTotal, StateTotal, Superlative};
pub use table::{DateBounds, SalesTable};
