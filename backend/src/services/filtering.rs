//! Predicate filtering of order lines.

use crate::models::{FilterCriteria, OrderLine};

/// Lines that satisfy every clause of `criteria`, in input order.
///
/// Borrowed rows only; the source table is never modified, so the same table
/// can be re-filtered for every request. Feeding the output back in with the
/// same criteria returns the same lines.
pub fn filter_lines<'a, I>(lines: I, criteria: &FilterCriteria) -> Vec<&'a OrderLine>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    lines
        .into_iter()
        .filter(|line| criteria.matches(line))
        .collect()
}
