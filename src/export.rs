//! Export of displayed data
//!
//! - CSV: the listing rows as shown (header = column labels)
//! - JSON: raw snapshot rows, or the line-chart payload

use std::io::Write;
use thiserror::Error;

use crate::listing::Column;
use crate::stats::CountryStat;
use crate::timeline::ChartData;

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format for exported data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("Unsupported export format: {}", other)),
        }
    }
}

/// Write rows as CSV; missing values are empty cells
pub fn write_csv<W: Write>(
    out: W,
    rows: &[&CountryStat],
    columns: &[Column],
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns.iter().map(|c| c.label()))?;

    for row in rows {
        writer.write_record(columns.iter().map(|c| row.field(c.id()).display_or("")))?;
    }

    writer.flush()?;
    Ok(())
}

/// Snapshot rows as pretty-printed JSON
pub fn rows_to_json(rows: &[&CountryStat]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Chart payload as pretty-printed JSON
pub fn chart_to_json(chart: &ChartData) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(chart)?)
}
