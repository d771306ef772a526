//! Output format types for the smsnorm library.
//!
//! # Example
//!
//! ```rust
//! use smsnorm::format::{OutputFormat, write_to_format};
//! use smsnorm::config::OutputConfig;
//! use smsnorm::Record;
//!
//! let records = vec![Record::new("a1", "12129876543", "49231971134", "Hi", "2015-06-22T09:12:45")];
//!
//! let format = OutputFormat::from_path("out.ndjson")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let mut jsonl = Vec::new();
//! write_to_format(&records, &mut jsonl, &OutputConfig::new().with_format(format))?;
//! assert_eq!(jsonl.iter().filter(|&&b| b == b'\n').count(), 1);
//! # Ok::<(), smsnorm::SmsNormError>(())
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::Record;
use crate::config::OutputConfig;
use crate::error::SmsNormError;

/// Output format for normalized records.
///
/// - [`Json`](OutputFormat::Json) - a single JSON array (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON array of records
    #[default]
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, SmsNormError> {
        let ext = path.rsplit_once('.').map_or("", |(_, ext)| ext);
        ext.parse().map_err(|_| {
            SmsNormError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        if name == "ndjson" {
            return Ok(OutputFormat::Jsonl);
        }
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.extension() == name)
            .ok_or_else(|| {
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                )
            })
    }
}

/// Writes records to `writer` in the configured format.
pub fn write_to_format<W: Write>(
    records: &[Record],
    writer: W,
    config: &OutputConfig,
) -> Result<(), SmsNormError> {
    match config.format {
        OutputFormat::Json => crate::core::output::write_json(records, writer, config.pretty),
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, writer),
    }
}
