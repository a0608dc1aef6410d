//! Listing table renderer

use std::io::{self, Write};

use super::{EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::listing::{Column, SortOrder};
use crate::view::ListingView;

/// Table layout options
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Columns to show, in order
    pub columns: Vec<Column>,
    /// Maximum number of rows (all when `None`)
    pub limit: Option<usize>,
    /// Text for missing values
    pub placeholder: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            columns: Column::ALL.to_vec(),
            limit: None,
            placeholder: String::new(),
        }
    }
}

fn header(column: Column, view: &ListingView) -> String {
    let sort = view.table().sort();
    if sort.order_by != column.id() {
        return column.label().to_string();
    }
    let arrow = match sort.order {
        SortOrder::Asc => '▲',
        SortOrder::Desc => '▼',
    };
    format!("{} {}", column.label(), arrow)
}

/// Render the listing view as an aligned text table
pub fn render_listing<W: Write>(
    out: &mut W,
    view: &ListingView,
    options: &TableOptions,
) -> io::Result<()> {
    if view.is_loading() {
        return writeln!(out, "{}", LOADING_MESSAGE);
    }

    let rows = view.rows();
    let shown = options.limit.unwrap_or(rows.len()).min(rows.len());

    let headers: Vec<String> = options.columns.iter().map(|c| header(*c, view)).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .take(shown)
        .map(|row| {
            options
                .columns
                .iter()
                .map(|c| row.field(c.id()).display_or(&options.placeholder))
                .collect()
        })
        .collect();

    let index_width = shown.max(1).to_string().len().max(1);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Header
    write!(out, "{:>w$}", "#", w = index_width)?;
    for (h, w) in headers.iter().zip(&widths) {
        write!(out, " | {:<w$}", h, w = w)?;
    }
    writeln!(out)?;

    // Separator
    let total: usize = index_width + widths.iter().map(|w| w + 3).sum::<usize>();
    writeln!(out, "{}", "-".repeat(total))?;

    if cells.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
    }

    // Data rows
    for (n, row) in cells.iter().enumerate() {
        write!(out, "{:>w$}", n + 1, w = index_width)?;
        for (i, (cell, w)) in row.iter().zip(&widths).enumerate() {
            if i == 0 {
                write!(out, " | {:<w$}", cell, w = w)?;
            } else {
                write!(out, " | {:>w$}", cell, w = w)?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    let table = view.table();
    write!(
        out,
        "Showing {} of {} countries | sort: {} {}",
        shown,
        table.total_count(),
        table.sort().order_by,
        table.sort().order
    )?;
    if !table.search().is_empty() {
        write!(out, " | search: \"{}\"", table.search())?;
    }
    writeln!(out)
}
