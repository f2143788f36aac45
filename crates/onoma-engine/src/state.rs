use onoma_types::Record;

use crate::Result;
use crate::filter::compute_visible;

/// Load status of the session.
///
/// `Ready` and `Failed` are terminal: there is no retry path, so once the
/// single startup load resolves the status never changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Failed(String),
}

/// The session's view state: dataset, search term, and the derived
/// visible subset.
///
/// Mutations go through `apply_load` and `set_search_term`; both recompute
/// `visible` before returning, so readers never observe a stale derivation.
/// Rendering layers treat this as read-only input.
#[derive(Debug, Clone)]
pub struct ViewState {
    records: Vec<Record>,
    search_term: String,
    visible: Vec<Record>,
    status: Status,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            search_term: String::new(),
            visible: Vec::new(),
            status: Status::Loading,
        }
    }

    /// Resolve the startup load. Called exactly once per session.
    ///
    /// Success fixes the dataset for the session; failure leaves it empty
    /// and carries the failure description into `Failed`.
    pub fn apply_load(&mut self, outcome: Result<Vec<Record>>) {
        match outcome {
            Ok(records) => {
                self.records = records;
                self.status = Status::Ready;
                self.recompute();
            }
            Err(err) => {
                self.records.clear();
                self.visible.clear();
                self.status = Status::Failed(err.to_string());
            }
        }
    }

    /// Replace the search term and recompute the visible set.
    /// Status is unaffected by search.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = compute_visible(&self.records, &self.search_term);
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Full admitted dataset, file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Currently visible subset, filter+sort applied.
    pub fn visible(&self) -> &[Record] {
        &self.visible
    }
}
