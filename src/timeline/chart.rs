//! Line-chart payload
//!
//! Serializes to the `{labels, datasets}` shape consumed by common
//! JavaScript charting widgets.

use serde::Serialize;

use super::ChartSeries;

const CASES_COLOR: &str = "rgba(253,126,20)";
const DEATHS_COLOR: &str = "rgba(220,53,69)";
const RECOVERED_COLOR: &str = "rgba(25,135,84)";

/// Complete chart input: shared label axis plus one dataset per series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
}

impl Dataset {
    fn new(label: &str, data: &[f64], color: &str) -> Self {
        Self {
            label: label.to_string(),
            data: data.to_vec(),
            background_color: color.to_string(),
            border_color: color.to_string(),
        }
    }
}

impl From<&ChartSeries> for ChartData {
    fn from(series: &ChartSeries) -> Self {
        Self {
            labels: series.labels.clone(),
            datasets: vec![
                Dataset::new("Cases", &series.cases, CASES_COLOR),
                Dataset::new("deaths", &series.deaths, DEATHS_COLOR),
                Dataset::new("recovered", &series.recovered, RECOVERED_COLOR),
            ],
        }
    }
}
