//! Terminal Rendering
//!
//! Plain-text presentation of the views. Every renderer writes to any
//! [`std::io::Write`] so output can be captured in tests.

mod chart;
mod panel;
mod table;

pub use chart::{render_chart, sparkline};
pub use panel::render_detail;
pub use table::{render_listing, TableOptions};

/// Shown while a view is loading
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown when the listing has no rows
pub const EMPTY_MESSAGE: &str = "No data found";
