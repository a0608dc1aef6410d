//! Listing view: the country table

use tracing::Instrument;
use uuid::Uuid;

use super::LoadState;
use crate::client::StatsSource;
use crate::listing::{ListingState, SortState};
use crate::stats::CountryStat;

/// Country table with live search and column sorting
#[derive(Debug)]
pub struct ListingView {
    load_id: Uuid,
    state: LoadState,
    table: ListingState,
}

impl ListingView {
    pub fn new(sort: SortState) -> Self {
        Self {
            load_id: Uuid::new_v4(),
            state: LoadState::Loading,
            table: ListingState::new(sort),
        }
    }

    /// Fetch every country's snapshot once
    ///
    /// On failure the error is logged and the table stays empty; the view
    /// becomes ready either way.
    pub async fn load<S: StatsSource + ?Sized>(&mut self, source: &S) {
        let span = tracing::info_span!("load_listing", load_id = %self.load_id);
        let result = source.fetch_countries().instrument(span.clone()).await;

        let _guard = span.enter();
        match result {
            Ok(data) => {
                tracing::info!(countries = data.len(), "Loaded country snapshots");
                self.table.replace(data);
            }
            Err(e) => {
                tracing::error!("Failed to fetch country snapshots: {}", e);
            }
        }
        self.state = LoadState::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn load_id(&self) -> Uuid {
        self.load_id
    }

    /// Keystroke in the search box
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.table.set_search(search);
    }

    /// Click on a column header
    pub fn request_sort(&mut self, field: &str) {
        self.table.request_sort(field);
        tracing::debug!(
            order_by = %self.table.sort().order_by,
            order = %self.table.sort().order,
            "Sort changed"
        );
    }

    /// Rows to display, filtered and sorted
    pub fn rows(&self) -> Vec<&CountryStat> {
        self.table.rows()
    }

    pub fn table(&self) -> &ListingState {
        &self.table
    }
}
