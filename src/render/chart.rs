//! Sparkline rendering of the historical series

use std::io::{self, Write};

use crate::timeline::ChartSeries;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Compress `values` into at most `width` bars
///
/// Each bar shows the last value of its bucket, scaled against the
/// series maximum. Negative and NaN values sit on the lowest bar.
pub fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let buckets = width.min(values.len());
    let sampled: Vec<f64> = (0..buckets)
        .map(|b| values[((b + 1) * values.len()).div_ceil(buckets) - 1])
        .collect();

    let max = sampled.iter().copied().fold(0.0, f64::max);
    sampled
        .iter()
        .map(|&v| {
            if max <= 0.0 || v.is_nan() || v <= 0.0 {
                BARS[0]
            } else {
                let level = (v / max * (BARS.len() - 1) as f64).round() as usize;
                BARS[level.min(BARS.len() - 1)]
            }
        })
        .collect()
}

/// Render the three series as labelled sparklines
pub fn render_chart<W: Write>(out: &mut W, series: &ChartSeries, width: usize) -> io::Result<()> {
    if series.is_empty() {
        return writeln!(out, "No historical data");
    }

    match series.date_range() {
        Some((first, last)) => writeln!(
            out,
            "{} to {} ({} days)",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d"),
            series.len()
        )?,
        None => writeln!(out, "{} data points", series.len())?,
    }

    let lines = [
        ("Cases", &series.cases),
        ("Deaths", &series.deaths),
        ("Recovered", &series.recovered),
    ];
    for (label, values) in lines {
        let latest = values
            .last()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<10} {:<w$} {}",
            label,
            sparkline(values, width),
            latest,
            w = width
        )?;
    }

    Ok(())
}
