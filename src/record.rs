//! Normalized SMS record.
//!
//! This module provides [`Record`], the single representation both row layouts
//! are converted into. All fields are normalized when the record is built: a
//! `Record` either exists with every field filled in, or construction failed.
//!
//! # Example
//!
//! ```rust
//! use smsnorm::Record;
//!
//! let row = ["(212) 452-1214", "(415) 999-1234", "This is a sample text", "2015-04-23 04:55:12", "00a12df6"];
//! let record = Record::parse(&row)?;
//!
//! assert_eq!(record.id(), "00a12df6");
//! assert_eq!(record.sender(), "12124521214");
//! assert_eq!(record.timestamp(), "2015-04-23T04:55:12");
//! # Ok::<(), smsnorm::SmsNormError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmsNormError};
use crate::layout::{Layout, classify};
use crate::normalize::{PhoneNormalizer, normalize_datetime};

/// Separator placed between message columns that the CSV reader split apart.
pub const MESSAGE_SEPARATOR: &str = ",";

/// Separator placed between the parts of a merged multi-part message.
pub const MERGE_SEPARATOR: &str = " ";

/// A normalized SMS delivery record.
///
/// | Field | Normalized to |
/// |-------|---------------|
/// | `id` | taken verbatim from the row |
/// | `sender` / `receiver` | `<country code><national number>` digits |
/// | `message` | message columns joined with `,` |
/// | `timestamp` | `YYYY-MM-DDTHH:MM:SS`, no offset |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    sender: String,
    receiver: String,
    message: String,
    timestamp: String,
}

impl Record {
    /// Creates a record from already-normalized values.
    pub fn new(
        id: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Builds a record from a raw row read with the given layout.
    ///
    /// Fails with [`SmsNormError::MalformedRow`] when the row is too short for
    /// the layout, or with the first phone or date/time parse error.
    pub fn from_row<S: AsRef<str>>(
        row: &[S],
        layout: Layout,
        phones: &PhoneNormalizer,
        message_separator: &str,
    ) -> Result<Self> {
        let fields = layout.fields();
        let missing = || SmsNormError::malformed_row(layout, row.len());

        if row.len() < fields.min_fields {
            return Err(missing());
        }

        let id = fields.id.get(row).ok_or_else(missing)?;
        let sender = phones.normalize(fields.sender.get(row).ok_or_else(missing)?)?;
        let receiver = phones.normalize(fields.receiver.get(row).ok_or_else(missing)?)?;

        let datetime = fields
            .datetime
            .iter()
            .map(|field| field.get(row).ok_or_else(missing))
            .collect::<Result<Vec<_>>>()?
            .join(" ");
        let timestamp = normalize_datetime(&datetime)?;

        let message = fields.message.join(row, message_separator);

        Ok(Self::new(id, sender, receiver, message, timestamp))
    }

    /// Classifies a row and builds a record using the default region.
    pub fn parse<S: AsRef<str>>(row: &[S]) -> Result<Self> {
        let phones = PhoneNormalizer::default();
        let layout = classify(row, &phones);
        Self::from_row(row, layout, &phones, MESSAGE_SEPARATOR)
    }

    /// Returns a new record whose message is this message followed by
    /// `other`'s, joined with `separator`. All other fields come from `self`.
    #[must_use]
    pub fn merge(&self, other: &Record, separator: &str) -> Record {
        Record {
            message: format!("{}{}{}", self.message, separator, other.message),
            ..self.clone()
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the record id (the multi-part message key).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the normalized sender number.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the normalized receiver number.
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the normalized timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
