//! Multi-part message merging and run statistics.

use std::collections::HashMap;

use crate::record::{MERGE_SEPARATOR, Record};

/// Merges records that share an id into one record per id.
///
/// Messages are concatenated in input order with a single space. The merged
/// record keeps the position and the non-message fields of the first record
/// with that id; records with a unique id are passed through in order.
///
/// # Example
///
/// ```rust
/// use smsnorm::Record;
/// use smsnorm::core::merge_common_records;
///
/// let records = vec![
///     Record::new("a1", "1", "2", "Message A.", "2015-06-22T09:12:45"),
///     Record::new("b7", "3", "4", "Unrelated", "2015-04-23T04:55:12"),
///     Record::new("a1", "1", "2", "Message B.", "2015-06-22T09:12:45"),
/// ];
///
/// let merged = merge_common_records(records);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].message(), "Message A. Message B.");
/// assert_eq!(merged[1].id(), "b7");
/// ```
pub fn merge_common_records(records: Vec<Record>) -> Vec<Record> {
    merge_common_records_with(records, MERGE_SEPARATOR)
}

/// Same as [`merge_common_records`] with a custom separator between parts.
pub fn merge_common_records_with(records: Vec<Record>, separator: &str) -> Vec<Record> {
    let mut merged: Vec<Record> = Vec::with_capacity(records.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for record in records {
        match positions.get(record.id()) {
            Some(&index) => {
                merged[index] = merged[index].merge(&record, separator);
            }
            None => {
                positions.insert(record.id().to_string(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

/// Statistics about one normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Rows read from the input
    pub rows_read: usize,
    /// Rows that became records
    pub records_built: usize,
    /// Rows skipped because a phone number or date/time did not parse
    pub rows_skipped: usize,
    /// Records left after merging
    pub records_written: usize,
}

impl ProcessingStats {
    /// Number of records folded into another record by merging.
    pub fn merged_away(&self) -> usize {
        self.records_built.saturating_sub(self.records_written)
    }

    /// Share of input rows that were skipped, in percent.
    pub fn skip_ratio(&self) -> f64 {
        if self.rows_read == 0 {
            return 0.0;
        }
        self.rows_skipped as f64 / self.rows_read as f64 * 100.0
    }
}
