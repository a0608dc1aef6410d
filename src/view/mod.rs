//! Views
//!
//! Each view owns its state, is created on navigation and dropped when
//! the user navigates away. Nothing is shared between views: revisiting
//! a route builds a fresh view and fetches again.
//!
//! ## Loading
//!
//! A view starts in [`LoadState::Loading`] and runs a one-shot load.
//! Success and failure both end in [`LoadState::Ready`]: a failed fetch is
//! logged and leaves the view's data empty.

mod detail;
mod listing;
mod route;

pub use detail::{format_timestamp, format_updated, DetailView, PanelField};
pub use listing::ListingView;
pub use route::Route;

/// Loading flag of one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
