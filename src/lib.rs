//! # smsnorm
//!
//! Normalizes SMS delivery exports into a single JSON document.
//!
//! ## Overview
//!
//! Exports arrive as CSV in one of two column layouts (see [`layout`]). Each
//! row is classified, its phone numbers are normalized to
//! `<country code><national number>` and its timestamp to
//! `YYYY-MM-DDTHH:MM:SS`. Records sharing an id are parts of one multi-part
//! message and are merged. The result is a JSON array of
//! `{from, message, sid, time, to}` objects.
//!
//! ## Quick Start
//!
//! ```rust
//! use smsnorm::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let input = "\
//! (212) 452-1214,(415) 999-1234,This is a sample text,2015-04-23 04:55:12,00a12df6
//! Mon,Jun 22 2015 09:12:45 GMT,4125425345,+49231971134,+12129876543,Message A.
//! Mon,Jun 22 2015 09:12:45 GMT,4125425345,+49231971134,+12129876543,Message B.
//! ";
//!
//!     let mut output = Vec::new();
//!     let mut skipped = CollectingSink::new();
//!     let stats = Normalizer::default().run(
//!         input.as_bytes(),
//!         &mut output,
//!         &OutputConfig::default(),
//!         &mut skipped,
//!     )?;
//!
//!     assert_eq!(stats.records_written, 2);
//!     assert!(skipped.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`normalize`] - phone number and date/time normalizers
//! - [`layout`] - row layouts and [`classify`](layout::classify)
//! - [`record`] - the normalized [`Record`]
//! - [`core`] - merging ([`merge_common_records`](core::merge_common_records)) and output writers
//! - [`pipeline`] - [`Normalizer`](pipeline::Normalizer): rows in, JSON out
//! - [`diagnostics`] - sinks for skipped rows
//! - [`config`], [`format`] - configuration and output formats
//! - [`error`] - unified error type ([`SmsNormError`], [`Result`])
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SmsNormError};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use smsnorm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;

    pub use crate::error::{Result, SmsNormError};

    pub use crate::config::{NormalizerConfig, OutputConfig};
    pub use crate::format::OutputFormat;

    pub use crate::layout::{Layout, classify};
    pub use crate::normalize::{PhoneNormalizer, normalize_datetime, normalize_phone_number};

    pub use crate::core::{ProcessingStats, merge_common_records, to_json, to_jsonl};

    pub use crate::diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
    pub use crate::pipeline::{Normalizer, read_rows};
}
