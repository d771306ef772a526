//! The normalization pipeline: rows in, merged records out.
//!
//! ```text
//! CSV rows -> classify -> Record (normalized) -> merge by id -> JSON
//!                              |
//!                              +-> DiagnosticSink (skipped rows)
//! ```
//!
//! The whole input is read before merging starts, since any later row may
//! continue a multi-part message.
//!
//! # Example
//!
//! ```rust
//! use smsnorm::diagnostics::CollectingSink;
//! use smsnorm::pipeline::Normalizer;
//!
//! # fn main() -> smsnorm::Result<()> {
//! let input = "\
//! Mon,Jun 22 2015 09:12:45 GMT,4125425345,+49231971134,+12129876543,Message A.
//! Mon,Jun 22 2015 09:12:45 GMT,4125425345,+49231971134,+12129876543,Message B.
//! ";
//!
//! let normalizer = Normalizer::default();
//! let mut sink = CollectingSink::new();
//! let rows = smsnorm::pipeline::read_rows(input.as_bytes())?;
//! let batch = normalizer.process(&rows, &mut sink)?;
//!
//! assert_eq!(batch.records.len(), 1);
//! assert_eq!(batch.records[0].message(), "Message A. Message B.");
//! assert!(sink.is_empty());
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Write};

use crate::Record;
use crate::config::{NormalizerConfig, OutputConfig};
use crate::core::output::to_json;
use crate::core::processor::{ProcessingStats, merge_common_records_with};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::format::write_to_format;
use crate::layout::{Layout, RawRow, classify};
use crate::normalize::PhoneNormalizer;

/// A raw row together with its 1-based input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedRow {
    pub line: u64,
    pub fields: RawRow,
}

impl NumberedRow {
    pub fn new<S: Into<String>>(line: u64, fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reads every CSV row from `reader`.
///
/// There is no header row and rows may have any number of fields.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<NumberedRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());
        rows.push(NumberedRow::new(line, record.iter()));
    }

    Ok(rows)
}

/// Records produced by one run, with statistics.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub records: Vec<Record>,
    pub stats: ProcessingStats,
}

/// Turns raw rows into normalized, merged records.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    phones: PhoneNormalizer,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            config: NormalizerConfig::default(),
            phones: PhoneNormalizer::default(),
        }
    }
}

impl Normalizer {
    /// Creates a normalizer, validating the configured default region.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let phones = PhoneNormalizer::new(&config.default_region)?;
        Ok(Self { config, phones })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Decides which layout a row uses.
    pub fn classify<S: AsRef<str>>(&self, row: &[S]) -> Layout {
        classify(row, &self.phones)
    }

    /// Classifies a row and builds its record.
    pub fn normalize_row<S: AsRef<str>>(&self, row: &[S]) -> Result<Record> {
        let layout = self.classify(row);
        Record::from_row(row, layout, &self.phones, &self.config.message_separator)
    }

    /// Normalizes and merges a batch of rows.
    ///
    /// Rows whose phone numbers or timestamps do not parse are reported to
    /// `sink` and left out, as are rows too short for the layout they were
    /// classified as but long enough for another one. Rows shorter than every
    /// layout abort the batch.
    pub fn process(&self, rows: &[NumberedRow], sink: &mut dyn DiagnosticSink) -> Result<Batch> {
        let mut records = Vec::with_capacity(rows.len());
        let mut stats = ProcessingStats {
            rows_read: rows.len(),
            ..ProcessingStats::default()
        };

        for row in rows {
            match self.normalize_row(&row.fields) {
                Ok(record) => records.push(record),
                Err(err) if err.is_recoverable() => {
                    let sid = self.classify(&row.fields).id(&row.fields);
                    sink.report(&Diagnostic::new(row.line, sid, &err));
                    stats.rows_skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        stats.records_built = records.len();

        let records = if self.config.merge {
            merge_common_records_with(records, &self.config.merge_separator)
        } else {
            records
        };
        stats.records_written = records.len();

        tracing::debug!(
            rows = stats.rows_read,
            skipped = stats.rows_skipped,
            merged = stats.merged_away(),
            "processed batch"
        );

        Ok(Batch { records, stats })
    }

    /// Reads CSV from `input`, writes the normalized document to `output`.
    ///
    /// Both handles are consumed and dropped when the run ends.
    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        output_config: &OutputConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<ProcessingStats> {
        let rows = read_rows(input)?;
        let batch = self.process(&rows, sink)?;
        write_to_format(&batch.records, output, output_config)?;
        Ok(batch.stats)
    }
}

/// Normalizes rows with the default configuration and returns the JSON array.
///
/// # Example
///
/// ```rust
/// use smsnorm::diagnostics::CollectingSink;
/// use smsnorm::pipeline::{NumberedRow, normalize_rows};
///
/// let rows = vec![NumberedRow::new(1, [
///     "(212) 452-1214", "(415) 999-1234", "This is a sample text", "2015-04-23 04:55:12", "00a12df6",
/// ])];
/// let mut skipped = CollectingSink::new();
///
/// let json = normalize_rows(&rows, &mut skipped)?;
/// assert!(json.contains(r#""from": "12124521214""#));
/// # Ok::<(), smsnorm::SmsNormError>(())
/// ```
pub fn normalize_rows(rows: &[NumberedRow], sink: &mut dyn DiagnosticSink) -> Result<String> {
    let batch = Normalizer::default().process(rows, sink)?;
    to_json(&batch.records, true)
}
