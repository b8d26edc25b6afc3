use serde::{Deserialize, Serialize};

use crate::models::asset::{AssetDetails, SearchResultItem};
use crate::models::price::HistoryPoint;

// ── User-facing messages ────────────────────────────────────────────

pub const MSG_EMPTY_QUERY: &str = "Please enter a search term.";
pub const MSG_NO_RESULTS: &str = "No cryptocurrencies found.";
pub const MSG_SEARCH_FAILED: &str = "Error fetching data. Try again.";
pub const MSG_DETAILS_FAILED: &str = "Error fetching details. Try again.";

/// Everything the tracker screen shows, in one container.
///
/// Only the transitions on [`TrackerView`](super::tracker::TrackerView)
/// mutate it. `results` and `selected` are independent: picking a
/// candidate leaves the candidate list in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackerState {
    /// Current contents of the search box
    pub query: String,

    /// Autocomplete candidates from the last successful search
    pub results: Vec<SearchResultItem>,

    /// Details of the picked asset, if any
    pub selected: Option<AssetDetails>,

    /// Chart points for `selected`
    pub history: Vec<HistoryPoint>,

    /// A backend call is in flight
    pub loading: bool,

    /// User-visible error line; empty means no error
    pub error: String,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
