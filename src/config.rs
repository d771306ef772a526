//! Configuration types for normalization and output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`NormalizerConfig`] - phone region, message joining and merging
//! - [`OutputConfig`] - output format and layout
//!
//! # Example
//!
//! ```rust
//! use smsnorm::config::{NormalizerConfig, OutputConfig};
//! use smsnorm::format::OutputFormat;
//!
//! let config = NormalizerConfig::new()
//!     .with_default_region("GB")
//!     .with_merge(false);
//!
//! let output = OutputConfig::new()
//!     .with_format(OutputFormat::Jsonl)
//!     .with_pretty(false);
//! ```

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::normalize::DEFAULT_REGION;
use crate::record::{MERGE_SEPARATOR, MESSAGE_SEPARATOR};

/// Configuration for turning raw rows into merged records.
///
/// # Example
///
/// ```rust
/// use smsnorm::config::NormalizerConfig;
///
/// let config = NormalizerConfig::default();
/// assert_eq!(config.default_region, "US");
/// assert!(config.merge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Region assumed for phone numbers without a country code (default: "US")
    pub default_region: String,

    /// Merge records that share an id (default: true)
    pub merge: bool,

    /// Joins message columns split apart by the CSV reader (default: ",")
    pub message_separator: String,

    /// Joins the parts of a merged message (default: " ")
    pub merge_separator: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.to_string(),
            merge: true,
            message_separator: MESSAGE_SEPARATOR.to_string(),
            merge_separator: MERGE_SEPARATOR.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback phone region (ISO 3166 alpha-2).
    #[must_use]
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Enables or disables merging of multi-part messages.
    #[must_use]
    pub fn with_merge(mut self, enabled: bool) -> Self {
        self.merge = enabled;
        self
    }

    /// Sets the separator used to rejoin message columns.
    #[must_use]
    pub fn with_message_separator(mut self, separator: impl Into<String>) -> Self {
        self.message_separator = separator.into();
        self
    }

    /// Sets the separator placed between merged message parts.
    #[must_use]
    pub fn with_merge_separator(mut self, separator: impl Into<String>) -> Self {
        self.merge_separator = separator.into();
        self
    }
}

/// Configuration for the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (default: JSON array)
    pub format: OutputFormat,

    /// Indent JSON arrays with two spaces (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables pretty-printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizer_defaults() {
        let config = NormalizerConfig::new();
        assert_eq!(config.default_region, "US");
        assert!(config.merge);
        assert_eq!(config.message_separator, ",");
        assert_eq!(config.merge_separator, " ");
    }

    #[test]
    fn test_normalizer_builder() {
        let config = NormalizerConfig::new()
            .with_default_region("DE")
            .with_merge(false)
            .with_message_separator(";")
            .with_merge_separator("\n");
        assert_eq!(config.default_region, "DE");
        assert!(!config.merge);
        assert_eq!(config.message_separator, ";");
        assert_eq!(config.merge_separator, "\n");
    }

    #[test]
    fn test_normalizer_partial_deserialize() {
        let config: NormalizerConfig =
            serde_json::from_str(r#"{"default_region": "GB"}"#).unwrap();
        assert_eq!(config.default_region, "GB");
        assert!(config.merge);
    }

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.pretty);

        let config = OutputConfig::new().with_format(OutputFormat::Jsonl).with_pretty(false);
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(!config.pretty);
    }
}
