use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use onoma_engine::{Error, parse_dataset};

/// Dataset diagnostics: where the file is, how many rows were admitted,
/// how many were dropped for a blank name.
///
/// A dataset that fails to load propagates the engine error, so the
/// process exits 1 with the failure description.
pub fn handle(dataset: &Path) -> Result<()> {
    println!("Dataset: {}", dataset.display());

    let raw = std::fs::read_to_string(dataset).map_err(Error::from)?;
    let report = parse_dataset(&raw)?;

    println!("Rows scanned: {}", report.total_rows());
    println!("{} admitted: {}", "✅".green(), report.admitted());

    if report.rejected > 0 {
        println!(
            "{} dropped (blank name): {}",
            "⚠️".yellow(),
            report.rejected
        );
    } else {
        println!("{} dropped: 0", "✅".green());
    }

    Ok(())
}
