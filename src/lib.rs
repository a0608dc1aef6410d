//! # Covid Dashboard
//!
//! Terminal dashboard for COVID-19 statistics fetched from a public REST
//! API: a searchable, sortable country table and a per-country chart with
//! a statistics panel.
//!
//! ## Modules
//!
//! - [`stats`]: Payload types for snapshots and historical series
//! - [`client`]: Statistics API client behind the [`StatsSource`] trait
//! - [`listing`]: Sort/filter pipeline for the country table
//! - [`timeline`]: Reshaping of historical series into chart sequences
//! - [`view`]: Listing and detail views with their loading state
//! - [`render`]: Plain-text rendering of the views
//! - [`export`]: CSV and JSON export
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use covid_dashboard::client::{ClientConfig, DiseaseClient};
//! use covid_dashboard::listing::SortState;
//! use covid_dashboard::view::{DetailView, ListingView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DiseaseClient::new(ClientConfig::default())?;
//!
//!     // Country table, filtered and sorted
//!     let mut listing = ListingView::new(SortState::default());
//!     listing.load(&client).await;
//!     listing.set_search("ind");
//!     listing.request_sort("cases");
//!     for row in listing.rows() {
//!         println!("{} {:?}", row.country, row.cases);
//!     }
//!
//!     // One country's chart sequences
//!     let mut detail = DetailView::new("India");
//!     detail.load(&client).await;
//!     println!("{} days of history", detail.series().len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod export;
pub mod listing;
pub mod logging;
pub mod render;
pub mod stats;
pub mod timeline;
pub mod view;

// Re-export top-level types for convenience
pub use stats::{CountryInfo, CountryStat, FieldValue, HistoricalRecord, Timeline};

pub use client::{ClientConfig, DiseaseClient, FetchError, FetchResult, StatsSource};

pub use listing::{Column, ListingState, SortOrder, SortState};

pub use timeline::{extract_series, ChartData, ChartSeries};

pub use view::{DetailView, ListingView, LoadState, Route};

pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig};

pub use export::{ExportError, ExportFormat};
