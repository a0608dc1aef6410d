//! Detail view renderer

use std::io::{self, Write};

use super::{render_chart, LOADING_MESSAGE};
use crate::view::DetailView;

const CHART_WIDTH: usize = 60;

/// Render the country chart followed by its statistics panel
pub fn render_detail<W: Write>(
    out: &mut W,
    view: &DetailView,
    placeholder: &str,
) -> io::Result<()> {
    if view.is_loading() {
        return writeln!(out, "{}", LOADING_MESSAGE);
    }

    writeln!(out, "<- Go Back (/)")?;
    writeln!(out)?;
    writeln!(out, "{}", view.country())?;
    writeln!(out, "Flag: {}", view.flag().unwrap_or(placeholder))?;
    writeln!(out)?;

    render_chart(out, view.series(), CHART_WIDTH)?;
    writeln!(out)?;

    let panel = view.panel();
    let width = panel.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for field in &panel {
        writeln!(
            out,
            "{:<w$} : {}",
            field.label,
            field.display(placeholder),
            w = width
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;
    use crate::stats::CountryStat;

    fn render(view: &DetailView) -> String {
        let mut out = Vec::new();
        render_detail(&mut out, view, "N/A").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_loading() {
        assert_eq!(render(&DetailView::new("India")), "Loading...\n");
    }

    #[test]
    fn test_failed_fetches_render_placeholders() {
        let mut view = DetailView::new("India");
        view.apply_snapshot(Err(FetchError::Unavailable));
        view.apply_history(Err(FetchError::Unavailable));

        let text = render(&view);
        assert!(text.contains("India"));
        assert!(text.contains("Flag: N/A"));
        assert!(text.contains("No historical data"));
        assert!(text.contains(&format!("{:<21} : N/A", "Population")));
        assert!(text.contains(&format!("{:<21} : N/A", "Updated at")));
    }

    #[test]
    fn test_snapshot_values() {
        let mut view = DetailView::new("Chile");
        view.apply_snapshot(Ok(CountryStat::new("Chile").with("population", 19_000_000.0)));
        view.apply_history(Ok(Vec::new()));

        let text = render(&view);
        assert!(text.contains(&format!("{:<21} : 19000000", "Population")));
    }
}
