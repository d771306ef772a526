//! Unified error types for smsnorm.
//!
//! This module provides a single [`SmsNormError`] enum that covers all error
//! cases in the library.
//!
//! # Recoverable vs. fatal errors
//!
//! - [`PhoneNumberParse`](SmsNormError::PhoneNumberParse) and
//!   [`DateTimeParse`](SmsNormError::DateTimeParse) are **row-level** failures.
//!   The pipeline reports them to a diagnostic sink and skips the row.
//!   So is [`MalformedRow`](SmsNormError::MalformedRow) when the row is long
//!   enough for another layout.
//! - Everything else (I/O, CSV syntax, rows too short for any layout, bad
//!   configuration) aborts the run.

use std::io;

use thiserror::Error;

use crate::layout::Layout;

/// A specialized [`Result`] type for smsnorm operations.
///
/// # Example
///
/// ```rust
/// use smsnorm::error::Result;
/// use smsnorm::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SmsNormError>;

/// The error type for all smsnorm operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SmsNormError {
    /// Neither the explicit-country-code parse nor the default-region parse
    /// accepted the phone number.
    #[error("Could not parse phone number '{input}': {reason}")]
    PhoneNumberParse {
        /// The raw phone number as it appeared in the row
        input: String,
        /// The reason reported by the last parse attempt
        reason: String,
    },

    /// The date/time string did not match any supported syntax.
    #[error("Could not parse date/time '{input}'")]
    DateTimeParse {
        /// The raw (combined) date/time string
        input: String,
    },

    /// A row has fewer fields than its layout requires.
    #[error("Row too short for layout {layout}: expected at least {expected} fields, got {actual}")]
    MalformedRow {
        /// The layout the row was classified as
        layout: Layout,
        /// Minimum number of fields for that layout
        expected: usize,
        /// Number of fields actually present
        actual: usize,
    },

    /// The configured default region is not a known ISO 3166 code.
    #[error("Invalid default region '{0}'. Expected an ISO 3166 alpha-2 code such as 'US'")]
    InvalidRegion(String),

    /// The output format name was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SmsNormError {
    /// Creates a phone number parse error.
    pub fn phone_number(input: impl Into<String>, reason: impl ToString) -> Self {
        SmsNormError::PhoneNumberParse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a date/time parse error.
    pub fn datetime(input: impl Into<String>) -> Self {
        SmsNormError::DateTimeParse {
            input: input.into(),
        }
    }

    /// Creates a malformed row error.
    pub fn malformed_row(layout: Layout, actual: usize) -> Self {
        SmsNormError::MalformedRow {
            layout,
            expected: layout.min_fields(),
            actual,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        SmsNormError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is a phone number parse error.
    pub fn is_phone_number(&self) -> bool {
        matches!(self, SmsNormError::PhoneNumberParse { .. })
    }

    /// Returns `true` if this is a date/time parse error.
    pub fn is_datetime(&self) -> bool {
        matches!(self, SmsNormError::DateTimeParse { .. })
    }

    /// Returns `true` if the pipeline may skip the offending row and continue.
    ///
    /// A row too short for its layout is recoverable as long as it is long
    /// enough for some layout: it was misclassified because of a bad phone
    /// number. Rows shorter than every layout are fatal.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SmsNormError::PhoneNumberParse { .. } | SmsNormError::DateTimeParse { .. } => true,
            SmsNormError::MalformedRow { actual, .. } => *actual >= Layout::shortest(),
            _ => false,
        }
    }
}
