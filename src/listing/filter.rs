//! Country-name search filter

use crate::stats::CountryStat;

/// Case-insensitive substring match of `search` against `name`
///
/// An empty search matches everything.
pub fn matches_country(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_uppercase().contains(&search.to_uppercase())
}

/// Positions of the records whose country name matches `search`,
/// in input order
pub fn filter_indices(items: &[CountryStat], search: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, stat)| matches_country(&stat.country, search))
        .map(|(i, _)| i)
        .collect()
}

/// Order-preserving subsequence of `items` matching `search`
pub fn filter_by_country<'a>(items: &'a [CountryStat], search: &str) -> Vec<&'a CountryStat> {
    items
        .iter()
        .filter(|stat| matches_country(&stat.country, search))
        .collect()
}
