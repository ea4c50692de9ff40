//! Group-by sums and argmax lookups.
//!
//! Groups live in a `BTreeMap`, so iteration follows key order:
//! lexicographic for names, chronological for months. Argmax lookups walk the
//! groups in that order and keep the first key that reaches the maximum, which
//! makes ties resolve to the smallest key.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::states::state_code;
use crate::models::{MonthTotal, NamedTotal, OrderLine, StateTotal, Superlative, YearMonth};

/// Sum `line_value` per key.
pub fn sum_by<K, F>(lines: &[&OrderLine], key: F) -> BTreeMap<K, Decimal>
where
    K: Ord,
    F: Fn(&OrderLine) -> K,
{
    let mut groups = BTreeMap::new();
    for line in lines {
        *groups.entry(key(*line)).or_insert(Decimal::ZERO) += line.line_value();
    }
    groups
}

pub fn sum_by_product(lines: &[&OrderLine]) -> BTreeMap<String, Decimal> {
    sum_by(lines, |l| l.product_name().to_string())
}

pub fn sum_by_region(lines: &[&OrderLine]) -> BTreeMap<String, Decimal> {
    sum_by(lines, |l| l.region_name().to_string())
}

pub fn sum_by_month(lines: &[&OrderLine]) -> BTreeMap<YearMonth, Decimal> {
    sum_by(lines, OrderLine::year_month)
}

/// Key with the largest total; `None` when there are no groups.
pub fn argmax<K: Clone>(groups: &BTreeMap<K, Decimal>) -> Option<Superlative<K>> {
    let mut best: Option<(&K, Decimal)> = None;
    for (key, total) in groups {
        match best {
            Some((_, best_total)) if *total <= best_total => {}
            _ => best = Some((key, *total)),
        }
    }
    best.map(|(key, total)| Superlative {
        key: key.clone(),
        total,
    })
}

/// Product ranking for the horizontal bar chart, smallest total first.
///
/// Equal totals keep name order.
pub fn product_ranking(groups: &BTreeMap<String, Decimal>) -> Vec<NamedTotal> {
    let mut ranking = named_totals(groups);
    ranking.sort_by(|a, b| a.total.cmp(&b.total));
    ranking
}

pub fn named_totals(groups: &BTreeMap<String, Decimal>) -> Vec<NamedTotal> {
    groups
        .iter()
        .map(|(name, total)| NamedTotal {
            name: name.clone(),
            total: *total,
        })
        .collect()
}

/// Region totals keyed by state code; regions without a code are dropped.
pub fn state_totals(region_groups: &BTreeMap<String, Decimal>) -> Vec<StateTotal> {
    region_groups
        .iter()
        .filter_map(|(region, total)| match state_code(region) {
            Some(code) => Some(StateTotal {
                state_code: code,
                region_name: region.clone(),
                total: *total,
            }),
            None => {
                debug!("Region '{}' has no state code, left off the map", region);
                None
            }
        })
        .collect()
}

pub fn month_series(groups: &BTreeMap<YearMonth, Decimal>) -> Vec<MonthTotal> {
    groups
        .iter()
        .map(|(month, total)| MonthTotal {
            month: *month,
            total: *total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderId;

    fn line(date: &str, region: &str, product: &str, qty: i64, price: i64) -> OrderLine {
        OrderLine::new(
            OrderId::new(1),
            date.parse().unwrap(),
            region,
            product,
            qty,
            Decimal::from(price),
        )
        .unwrap()
    }

    fn groups(entries: &[(&str, i64)]) -> BTreeMap<String, Decimal> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Decimal::from(*v)))
            .collect()
    }

    #[test]
    fn test_sum_by_month_is_chronological() {
        let lines = [
            line("2013-02-15", "Texas", "Gadget", 3, 5),
            line("2012-12-01", "Texas", "Widget", 1, 1),
            line("2013-01-05", "Texas", "Widget", 2, 10),
            line("2013-02-10", "Ohio", "Widget", 1, 10),
        ];
        let refs: Vec<&OrderLine> = lines.iter().collect();
        let series = month_series(&sum_by_month(&refs));

        let keys: Vec<String> = series.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(keys, ["2012-12", "2013-01", "2013-02"]);
        assert_eq!(series[2].total, Decimal::from(25));
    }

    #[test]
    fn test_argmax_empty() {
        assert!(argmax::<String>(&BTreeMap::new()).is_none());
    }

    #[test]
    fn test_argmax_picks_largest() {
        let g = groups(&[("East", 10), ("West", 35), ("North", 12)]);
        let best = argmax(&g).unwrap();
        assert_eq!(best.key, "West");
        assert_eq!(best.total, Decimal::from(35));
    }

    #[test]
    fn test_argmax_tie_goes_to_smallest_key() {
        let g = groups(&[("Zeta", 50), ("Alpha", 50), ("Mid", 10)]);
        assert_eq!(argmax(&g).unwrap().key, "Alpha");
    }

    #[test]
    fn test_argmax_tie_on_months_goes_to_earliest() {
        let mut g = BTreeMap::new();
        g.insert(YearMonth::new(2013, 5).unwrap(), Decimal::from(7));
        g.insert(YearMonth::new(2012, 11).unwrap(), Decimal::from(7));
        assert_eq!(argmax(&g).unwrap().key.to_string(), "2012-11");
    }

    #[test]
    fn test_product_ranking_ascending_with_name_ties() {
        let g = groups(&[("Widget", 30), ("Gadget", 15), ("Bolt", 15), ("Axle", 40)]);
        let names: Vec<String> = product_ranking(&g).into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Bolt", "Gadget", "Widget", "Axle"]);
    }

    #[test]
    fn test_state_totals_drop_unmapped_regions() {
        let g = groups(&[("Texas", 10), ("Ontario", 99), ("Ohio", 5)]);
        let states = state_totals(&g);
        let codes: Vec<&str> = states.iter().map(|s| s.state_code).collect();
        assert_eq!(codes, ["OH", "TX"]);
        assert_eq!(states[1].region_name, "Texas");
    }
}
