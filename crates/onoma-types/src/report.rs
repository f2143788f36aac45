use serde::{Deserialize, Serialize};

use crate::Record;

/// Outcome of parsing a dataset file.
///
/// `records` holds the admitted rows in file order. `rejected` counts rows
/// dropped for a blank or missing name; rejection is not an error unless it
/// leaves `records` empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetReport {
    pub records: Vec<Record>,
    pub rejected: usize,
}

impl DatasetReport {
    pub fn admitted(&self) -> usize {
        self.records.len()
    }

    /// Total rows seen by the parser, admitted or not.
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected
    }
}
