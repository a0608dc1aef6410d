//! Sort state and comparators
//!
//! Sorting works on arbitrary field names. Values of the same kind are
//! compared directly; values of different kinds follow a fixed rank
//! (absent, then numbers, then text) so the comparator stays a total
//! order. A field literally named `date` holds "DD-MM-YYYY" strings and
//! is compared as a calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::stats::{CountryStat, FieldValue};

/// Field name that triggers calendar-date comparison
pub const DATE_FIELD: &str = "date";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order: {}. Use: asc, desc", other)),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub order_by: String,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            order_by: "country".to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl SortState {
    pub fn new(order_by: impl Into<String>, order: SortOrder) -> Self {
        Self {
            order_by: order_by.into(),
            order,
        }
    }

    /// Apply a column-header click
    ///
    /// The active column toggles its direction; any other column becomes
    /// active with descending order.
    pub fn request(&mut self, field: &str) {
        if self.order_by == field {
            self.order = self.order.toggle();
        } else {
            self.order_by = field.to_string();
            self.order = SortOrder::Desc;
        }
    }

    /// Comparator for this state
    pub fn comparator(&self) -> impl Fn(&CountryStat, &CountryStat) -> Ordering + '_ {
        comparator(self.order, &self.order_by)
    }
}

/// Natural (ascending) ordering of two field values
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => compare_numbers(*x, *y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Absent => 0,
        FieldValue::Number(_) => 1,
        FieldValue::Text(_) => 2,
    }
}

// NaN sorts below every other number; 0.0 and -0.0 are equal.
fn compare_numbers(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y)
        .unwrap_or_else(|| x.is_nan().cmp(&y.is_nan()).reverse())
}

/// Parse a "DD-MM-YYYY" value by reversing its dash-separated parts
pub fn parse_dashed_date(value: &str) -> Option<NaiveDate> {
    let reversed: Vec<&str> = value.split('-').rev().collect();
    NaiveDate::parse_from_str(&reversed.join("-"), "%Y-%m-%d").ok()
}

fn date_of(value: &FieldValue) -> Option<NaiveDate> {
    value.as_text().and_then(parse_dashed_date)
}

/// Descending comparator: larger values (or later dates) first
pub fn descending_comparator(a: &CountryStat, b: &CountryStat, order_by: &str) -> Ordering {
    let (a, b) = (a.field(order_by), b.field(order_by));
    if order_by == DATE_FIELD {
        return date_of(&b).cmp(&date_of(&a));
    }
    compare_values(&b, &a)
}

/// Build the comparator for a direction and field
pub fn comparator(
    order: SortOrder,
    order_by: &str,
) -> impl Fn(&CountryStat, &CountryStat) -> Ordering + '_ {
    move |a: &CountryStat, b: &CountryStat| match order {
        SortOrder::Desc => descending_comparator(a, b, order_by),
        SortOrder::Asc => descending_comparator(a, b, order_by).reverse(),
    }
}

/// Stable sort: elements comparing equal keep their input order
pub fn stable_sort<'a, T, F>(items: impl IntoIterator<Item = &'a T>, compare: F) -> Vec<&'a T>
where
    T: 'a,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted: Vec<&T> = items.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[&CountryStat]) -> Vec<String> {
        rows.iter().map(|r| r.country.clone()).collect()
    }

    fn sample() -> Vec<CountryStat> {
        vec![
            CountryStat::new("India").with("cases", 10.0),
            CountryStat::new("Brazil").with("cases", 5.0),
            CountryStat::new("Chile").with("cases", 20.0),
        ]
    }

    #[test]
    fn test_sort_numbers_both_directions() {
        let data = sample();

        let asc = stable_sort(&data, comparator(SortOrder::Asc, "cases"));
        assert_eq!(names(&asc), vec!["Brazil", "India", "Chile"]);

        let desc = stable_sort(&data, comparator(SortOrder::Desc, "cases"));
        assert_eq!(names(&desc), vec!["Chile", "India", "Brazil"]);
    }

    #[test]
    fn test_sort_text() {
        let data = sample();
        let desc = stable_sort(&data, comparator(SortOrder::Desc, "country"));
        assert_eq!(names(&desc), vec!["India", "Chile", "Brazil"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = vec![
            CountryStat::new("A").with("deaths", 1.0),
            CountryStat::new("B").with("deaths", 2.0),
            CountryStat::new("C").with("deaths", 1.0),
            CountryStat::new("D").with("deaths", 2.0),
        ];

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let once = stable_sort(&data, comparator(order, "deaths"));
            let twice = stable_sort(once.iter().copied(), comparator(order, "deaths"));
            assert_eq!(names(&once), names(&twice));
        }

        let desc = stable_sort(&data, comparator(SortOrder::Desc, "deaths"));
        assert_eq!(names(&desc), vec!["B", "D", "A", "C"]);
        let asc = stable_sort(&data, comparator(SortOrder::Asc, "deaths"));
        assert_eq!(names(&asc), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_absent_values_rank_below_numbers() {
        let data = vec![
            CountryStat::new("A").with("tests", 3.0),
            CountryStat::new("B"),
            CountryStat::new("C").with("tests", 1.0),
        ];
        let desc = stable_sort(&data, comparator(SortOrder::Desc, "tests"));
        assert_eq!(names(&desc), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_nan_is_total() {
        assert_eq!(compare_numbers(f64::NAN, 1.0), Ordering::Less);
        assert_eq!(compare_numbers(1.0, f64::NAN), Ordering::Greater);
        assert_eq!(compare_numbers(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(compare_numbers(0.0, -0.0), Ordering::Equal);
    }

    #[test]
    fn test_date_field_compares_calendar_dates() {
        let data = vec![
            CountryStat::new("Old").with_text("date", "25-12-2020"),
            CountryStat::new("New").with_text("date", "02-01-2021"),
            CountryStat::new("Mid").with_text("date", "30-12-2020"),
        ];

        // Lexicographic order would put "30-12-2020" first.
        let desc = stable_sort(&data, comparator(SortOrder::Desc, DATE_FIELD));
        assert_eq!(names(&desc), vec!["New", "Mid", "Old"]);

        let asc = stable_sort(&data, comparator(SortOrder::Asc, DATE_FIELD));
        assert_eq!(names(&asc), vec!["Old", "Mid", "New"]);
    }

    #[test]
    fn test_parse_dashed_date() {
        assert_eq!(
            parse_dashed_date("05-03-2021"),
            NaiveDate::from_ymd_opt(2021, 3, 5)
        );
        assert_eq!(parse_dashed_date("not a date"), None);
    }

    #[test]
    fn test_request_toggles_same_column() {
        let mut state = SortState::default();
        assert_eq!(state.order_by, "country");
        assert_eq!(state.order, SortOrder::Desc);

        state.request("country");
        assert_eq!(state.order, SortOrder::Asc);
        state.request("country");
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_request_other_column_resets_to_descending() {
        let mut state = SortState::new("cases", SortOrder::Asc);
        state.request("deaths");
        assert_eq!(state.order_by, "deaths");
        assert_eq!(state.order, SortOrder::Desc);

        let mut state = SortState::new("cases", SortOrder::Desc);
        state.request("deaths");
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("descending".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("up".parse::<SortOrder>().is_err());
    }
}
