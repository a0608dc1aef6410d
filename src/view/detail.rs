//! Detail view: one country's chart and statistics panel

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use tracing::Instrument;
use uuid::Uuid;

use super::LoadState;
use crate::client::{FetchResult, StatsSource};
use crate::stats::{CountryStat, FieldValue, HistoricalRecord};
use crate::timeline::{extract_series, ChartData, ChartSeries};

/// Panel rows: label and snapshot field, in display order
const PANEL_FIELDS: [(&str, &str); 20] = [
    ("Active", "active"),
    ("Active Per Million", "activePerOneMillion"),
    ("Cases", "cases"),
    ("Cases Per Million", "casesPerOneMillion"),
    ("Continent", "continent"),
    ("Critical", "critical"),
    ("Critical Per Million", "criticalPerOneMillion"),
    ("Deaths", "deaths"),
    ("Deaths Per Million", "deathsPerOneMillion"),
    ("Case Per People", "oneCasePerPeople"),
    ("Death Per People", "oneDeathPerPeople"),
    ("Test Per People", "oneTestPerPeople"),
    ("Population", "population"),
    ("Recovered", "recovered"),
    ("Recovered Per Million", "recoveredPerOneMillion"),
    ("Tests", "tests"),
    ("Tests Per Million", "testsPerOneMillion"),
    ("Today Cases", "todayCases"),
    ("Today Deaths", "todayDeaths"),
    ("Today Recovered", "todayRecovered"),
];

/// One labelled value of the statistics panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelField {
    pub label: &'static str,
    pub value: Option<String>,
}

impl PanelField {
    /// The value, or `placeholder` when missing
    pub fn display<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.value.as_deref().unwrap_or(placeholder)
    }
}

/// Format a timestamp as "DD-MM-YYYY hh:mm:ss AM/PM"
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d-%m-%Y %I:%M:%S %p").to_string()
}

/// Format an `updated` epoch-millisecond value in local time
pub fn format_updated(ms: i64) -> Option<String> {
    let utc = DateTime::from_timestamp_millis(ms)?;
    Some(format_timestamp(&utc.with_timezone(&Local)))
}

/// Chart and statistics for one country
///
/// Two independent fetches feed the view: the country's snapshot and the
/// historical series of every country. Each has its own loading flag and
/// the view is loading until both are cleared.
#[derive(Debug)]
pub struct DetailView {
    load_id: Uuid,
    country: String,
    snapshot: Option<CountryStat>,
    series: ChartSeries,
    snapshot_state: LoadState,
    history_state: LoadState,
}

impl DetailView {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            load_id: Uuid::new_v4(),
            country: country.into(),
            snapshot: None,
            series: ChartSeries::default(),
            snapshot_state: LoadState::Loading,
            history_state: LoadState::Loading,
        }
    }

    /// Dispatch both fetches concurrently and apply their results
    pub async fn load<S: StatsSource + ?Sized>(&mut self, source: &S) {
        let span = tracing::info_span!(
            "load_detail",
            load_id = %self.load_id,
            country = %self.country
        );

        let (snapshot, history) = futures_util::future::join(
            source.fetch_country(&self.country),
            source.fetch_historical(),
        )
        .instrument(span.clone())
        .await;

        let _guard = span.enter();
        self.apply_snapshot(snapshot);
        self.apply_history(history);
    }

    /// Apply the snapshot fetch result and clear its loading flag
    pub fn apply_snapshot(&mut self, result: FetchResult<CountryStat>) {
        match result {
            Ok(stat) => {
                tracing::debug!(country = %stat.country, "Loaded country snapshot");
                self.snapshot = Some(stat);
            }
            Err(e) => {
                tracing::error!("Failed to fetch snapshot for {}: {}", self.country, e);
            }
        }
        self.snapshot_state = LoadState::Ready;
    }

    /// Apply the history fetch result and clear its loading flag
    pub fn apply_history(&mut self, result: FetchResult<Vec<HistoricalRecord>>) {
        match result {
            Ok(records) => {
                self.series = extract_series(&records, &self.country);
                if self.series.diverges {
                    tracing::warn!(
                        "Timeline maps for {} differ in keys; deaths and recovered may not line up with the date axis",
                        self.country
                    );
                }
                tracing::info!(
                    records = records.len(),
                    points = self.series.len(),
                    "Loaded historical series"
                );
            }
            Err(e) => {
                tracing::error!("Failed to fetch historical series: {}", e);
            }
        }
        self.history_state = LoadState::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot_state.is_loading() || self.history_state.is_loading()
    }

    pub fn snapshot_state(&self) -> LoadState {
        self.snapshot_state
    }

    pub fn history_state(&self) -> LoadState {
        self.history_state
    }

    /// Country identifier taken from the navigation path
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn snapshot(&self) -> Option<&CountryStat> {
        self.snapshot.as_ref()
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::from(&self.series)
    }

    pub fn flag(&self) -> Option<&str> {
        self.snapshot.as_ref()?.flag()
    }

    /// Statistics panel rows; every value is missing without a snapshot
    pub fn panel(&self) -> Vec<PanelField> {
        let value = |field: &str| {
            let v = self
                .snapshot
                .as_ref()
                .map(|s| s.field(field))
                .unwrap_or(FieldValue::Absent);
            (!v.is_absent()).then(|| v.to_string())
        };

        let mut rows: Vec<PanelField> = PANEL_FIELDS
            .iter()
            .map(|&(label, field)| PanelField {
                label,
                value: value(field),
            })
            .collect();

        rows.push(PanelField {
            label: "Updated at",
            value: self
                .snapshot
                .as_ref()
                .and_then(|s| s.updated)
                .and_then(format_updated),
        });

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;
    use crate::stats::Timeline;
    use chrono::Utc;

    fn history() -> Vec<HistoricalRecord> {
        let mut timeline = Timeline::default();
        timeline.cases.insert("1/22/20".into(), 0.0);
        timeline.cases.insert("1/23/20".into(), 0.0);
        vec![HistoricalRecord::new("India", timeline)]
    }

    #[test]
    fn test_loading_until_both_flags_clear() {
        let mut view = DetailView::new("India");
        assert!(view.is_loading());

        view.apply_history(Ok(history()));
        assert!(view.is_loading());
        assert_eq!(view.history_state(), LoadState::Ready);

        view.apply_snapshot(Ok(CountryStat::new("India").with("cases", 5.0)));
        assert!(!view.is_loading());
        assert_eq!(view.series().labels, vec!["1/22/20", "1/23/20"]);
    }

    #[test]
    fn test_failed_snapshot_renders_placeholders() {
        let mut view = DetailView::new("India");
        view.apply_snapshot(Err(FetchError::Unavailable));
        view.apply_history(Err(FetchError::Timeout));

        assert!(!view.is_loading());
        let panel = view.panel();
        assert_eq!(panel.len(), 21);
        assert!(panel.iter().all(|f| f.display("N/A") == "N/A"));
        assert!(view.series().is_empty());
        assert_eq!(view.flag(), None);
    }

    #[test]
    fn test_panel_values() {
        let mut view = DetailView::new("India");
        view.apply_snapshot(Ok(CountryStat::new("India")
            .with("active", 42.0)
            .with_text("continent", "Asia")));

        let panel = view.panel();
        assert_eq!(panel[0].label, "Active");
        assert_eq!(panel[0].display("N/A"), "42");
        assert_eq!(panel[4].display("N/A"), "Asia");
        assert_eq!(panel[2].display("N/A"), "N/A");
        assert_eq!(panel[20].label, "Updated at");
    }

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2021, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(format_timestamp(&dt), "05-03-2021 02:07:09 PM");
        assert!(format_updated(1_614_953_229_000).is_some());
    }
}
