use onoma_types::Record;

/// Compute the visible subset for a search term.
///
/// A trimmed-empty term is the identity: the full record list in original
/// order, unsorted. A non-empty term keeps the records whose lowercased
/// name starts with the trimmed lowercased term, then sorts them ascending
/// by lowercased name. The sort is stable, so equal names keep the order
/// in which they were encountered.
pub fn compute_visible(records: &[Record], term: &str) -> Vec<Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    let mut visible: Vec<Record> = records
        .iter()
        .filter(|record| record.name.to_lowercase().starts_with(&needle))
        .cloned()
        .collect();

    visible.sort_by_key(|record| record.name.to_lowercase());
    visible
}
