//! Output writers.
//!
//! - [`write_json`] / [`to_json`] - a JSON array of records
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line
//!
//! Every record is rendered with the keys `from`, `message`, `sid`, `time`
//! and `to`, in that (alphabetical) order.
//!
//! # Example
//!
//! ```rust
//! use smsnorm::core::output::to_json;
//! use smsnorm::Record;
//!
//! let records = vec![Record::new("a1", "12129876543", "49231971134", "Hi", "2015-06-22T09:12:45")];
//!
//! let json = to_json(&records, true)?;
//! assert!(json.contains(r#""sid": "a1""#));
//! # Ok::<(), smsnorm::SmsNormError>(())
//! ```

mod json_writer;
mod jsonl_writer;

pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};

use serde::Serialize;

use crate::Record;

/// Wire shape of one record. Field order is the serialized key order.
#[derive(Serialize)]
struct JsonRecord<'a> {
    from: &'a str,
    message: &'a str,
    sid: &'a str,
    time: &'a str,
    to: &'a str,
}

impl<'a> From<&'a Record> for JsonRecord<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            from: record.sender(),
            message: record.message(),
            sid: record.id(),
            time: record.timestamp(),
            to: record.receiver(),
        }
    }
}
