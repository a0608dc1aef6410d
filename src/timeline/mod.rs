//! Time-Series Reshaping
//!
//! Picks one country out of the historical payload and flattens its three
//! day-keyed maps into index-aligned sequences for a line chart.
//!
//! The label axis comes from the `cases` map. The `deaths` and
//! `recovered` sequences are walked in their own maps' order and are not
//! re-keyed against the labels, so a payload whose maps disagree yields
//! sequences that are positionally misaligned. `ChartSeries::diverges`
//! flags that case.

mod chart;

pub use chart::{ChartData, Dataset};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::stats::{HistoricalRecord, Timeline};

/// Date-label format of the historical payload ("1/22/20")
pub const LABEL_FORMAT: &str = "%m/%d/%y";

/// Parallel chart sequences for one country
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub cases: Vec<f64>,
    pub deaths: Vec<f64>,
    pub recovered: Vec<f64>,
    /// Whether the source maps differed in key set or key order
    #[serde(skip)]
    pub diverges: bool,
}

impl ChartSeries {
    /// Build the sequences from one timeline
    pub fn from_timeline(timeline: &Timeline) -> Self {
        Self {
            labels: timeline.cases.keys().cloned().collect(),
            cases: timeline.cases.values().copied().collect(),
            deaths: timeline.deaths.values().copied().collect(),
            recovered: timeline.recovered.values().copied().collect(),
            diverges: !same_keys(&timeline.cases, &timeline.deaths)
                || !same_keys(&timeline.cases, &timeline.recovered),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.deaths.is_empty() && self.recovered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// First and last label parsed as dates, when both parse
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = parse_label(self.labels.first()?)?;
        let last = parse_label(self.labels.last()?)?;
        Some((first, last))
    }

    /// Latest value of each series
    pub fn latest(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        (
            self.cases.last().copied(),
            self.deaths.last().copied(),
            self.recovered.last().copied(),
        )
    }
}

fn same_keys(a: &IndexMap<String, f64>, b: &IndexMap<String, f64>) -> bool {
    a.len() == b.len() && a.keys().zip(b.keys()).all(|(x, y)| x == y)
}

/// Locate the record for `country` (exact, case-sensitive) and reshape it
///
/// When several records carry the same country, the last one wins. No
/// match, or a match without a timeline, yields empty sequences.
pub fn extract_series(history: &[HistoricalRecord], country: &str) -> ChartSeries {
    history
        .iter()
        .rev()
        .find(|record| record.country == country)
        .and_then(|record| record.timeline.as_ref())
        .map(ChartSeries::from_timeline)
        .unwrap_or_default()
}

/// Parse an "M/D/YY" date label
pub fn parse_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, LABEL_FORMAT).ok()
}
