//! Listing Sort/Filter Pipeline
//!
//! Turns the full in-memory list of country snapshots into the rows the
//! listing table shows:
//!
//! 1. **Filter**: case-insensitive substring match on the country name
//! 2. **Sort**: stable sort on any field, ascending or descending
//!
//! The full dataset is the source of truth. The displayed subset is
//! always recomputed from it and is never edited on its own.

mod columns;
mod filter;
mod sort;

pub use columns::Column;
pub use filter::{filter_by_country, filter_indices, matches_country};
pub use sort::{
    comparator, compare_values, descending_comparator, parse_dashed_date, stable_sort,
    SortOrder, SortState, DATE_FIELD,
};

use crate::stats::CountryStat;

/// In-memory listing state: full dataset, search string and sort state
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    full: Vec<CountryStat>,
    displayed: Vec<usize>,
    search: String,
    sort: SortState,
}

impl ListingState {
    /// Create an empty listing with the given initial sort
    pub fn new(sort: SortState) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// Replace the full dataset (never merged) and re-apply the search
    pub fn replace(&mut self, data: Vec<CountryStat>) {
        self.full = data;
        self.refilter();
    }

    /// Update the search string and recompute the displayed subset
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.refilter();
    }

    /// Column-header click on `field`
    pub fn request_sort(&mut self, field: &str) {
        self.sort.request(field);
    }

    /// Set the sort state directly
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Displayed rows: filtered subset sorted by the current sort state
    pub fn rows(&self) -> Vec<&CountryStat> {
        stable_sort(
            self.displayed.iter().map(|&i| &self.full[i]),
            self.sort.comparator(),
        )
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Full dataset in fetch order
    pub fn full(&self) -> &[CountryStat] {
        &self.full
    }

    pub fn total_count(&self) -> usize {
        self.full.len()
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    /// Look up a record of the full dataset by exact country name
    pub fn find(&self, country: &str) -> Option<&CountryStat> {
        self.full.iter().find(|s| s.country == country)
    }

    fn refilter(&mut self) {
        self.displayed = filter_indices(&self.full, &self.search);
    }
}
