use csv::{ReaderBuilder, StringRecord};
use onoma_types::{DatasetReport, Record};

use crate::{Error, Result};

/// Parse raw CSV text into a dataset report.
///
/// The first line is the header; each data row is mapped header-name →
/// cell value. Short rows are padded with empty strings, unknown headers
/// are ignored, and blank lines never reach us (csv crate default).
/// Rows with a blank or missing `name` are rejected, not errored;
/// `Error::EmptyDataset` fires only when nothing at all is admitted.
pub fn parse_dataset(input: &str) -> Result<DatasetReport> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut rejected = 0usize;

    for row in reader.records() {
        let row = row?;
        let record = row_to_record(&headers, &row);
        if record.is_admissible() {
            records.push(record);
        } else {
            rejected += 1;
        }
    }

    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }

    Ok(DatasetReport { records, rejected })
}

fn row_to_record(headers: &StringRecord, row: &StringRecord) -> Record {
    let mut record = Record::default();

    for (index, header) in headers.iter().enumerate() {
        let value = row.get(index).unwrap_or("");
        match header.trim() {
            "name" => record.name = value.to_string(),
            "length" => record.length = value.to_string(),
            "syllables_est" => record.syllables_est = value.to_string(),
            "vowel_ratio" => record.vowel_ratio = value.to_string(),
            "starts_with" => record.starts_with = value.to_string(),
            "ending" => record.ending = value.to_string(),
            "endswith_a" => record.endswith_a = value.to_string(),
            "endswith_i" => record.endswith_i = value.to_string(),
            "endswith_y" => record.endswith_y = value.to_string(),
            _ => {}
        }
    }

    record
}
