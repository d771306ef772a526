//! Free-form date/time normalization.
//!
//! Accepts the human-readable shapes found in SMS exports (ISO dates, month
//! names, leading weekday names, `GMT`/`Z`/numeric offset suffixes) and renders
//! them as `YYYY-MM-DDTHH:MM:SS`. Offsets are dropped, not applied: the wall
//! clock time in the input is the time in the output.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;

use crate::error::{Result, SmsNormError};

/// Canonical output format.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Leading weekday token ("Mon", "Monday", "Tue.").
static WEEKDAY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?\s+").expect("valid weekday regex")
});

/// Zone abbreviation or numeric offset standing as its own word, anywhere in
/// the string ("GMT", "utc", "+0000" in "Mon Jun 22 09:12:45 +0000 2015").
static ZONE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\b(?:Z|UTC|GMT|EST|EDT|CST|CDT|MST|MDT|PST|PDT)\b|\s+[+-]\d{2}:?\d{2}\b")
        .expect("valid zone token regex")
});

/// Zone designator or offset glued to the end of the time ("12:45Z", "12:45+05:30").
static ZONE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d)(?:Z|[+-]\d{2}:?\d{2})$").expect("valid zone suffix regex")
});

/// Date and time layouts, tried in order after cleanup.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%B %d %Y %H:%M:%S%.f",
    "%B %d %Y %I:%M:%S %p",
    "%B %d %Y %I:%M:%S%p",
    "%B %d %Y %H:%M",
    "%B %d %Y %I:%M %p",
    "%B %d %Y %I:%M%p",
    // asctime and `date` output: year after the time
    "%B %d %H:%M:%S%.f %Y",
    "%B %d %H:%M %Y",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
    "%d %B %Y %I:%M%p",
    "%Y%m%dT%H%M%S",
];

/// Date-only layouts; the time defaults to midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%d %B %Y",
    "%Y%m%d",
];

/// Parses a free-form date/time string into a naive (zone-less) value with
/// sub-second precision removed.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    parse_naive(raw)
        .and_then(|dt| dt.with_nanosecond(0))
        .ok_or_else(|| SmsNormError::datetime(raw))
}

/// Normalizes a date/time string to `YYYY-MM-DDTHH:MM:SS`.
///
/// # Example
///
/// ```rust
/// use smsnorm::normalize::normalize_datetime;
///
/// assert_eq!(normalize_datetime("2015-01-01").unwrap(), "2015-01-01T00:00:00");
/// assert_eq!(
///     normalize_datetime("Jun 22 2015 09:12:45 GMT").unwrap(),
///     "2015-06-22T09:12:45"
/// );
/// ```
pub fn normalize_datetime(raw: &str) -> Result<String> {
    parse_datetime(raw).map(|dt| dt.format(CANONICAL_FORMAT).to_string())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Well-formed machine timestamps keep their wall-clock time.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.naive_local());
    }

    let cleaned = clean(trimmed);

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Drops commas, a leading weekday and zone designators, and collapses whitespace.
fn clean(input: &str) -> String {
    let collapsed = input
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let without_weekday = WEEKDAY_PREFIX.replace(&collapsed, "");
    let without_zone = ZONE_TOKEN.replace_all(&without_weekday, "");
    ZONE_SUFFIX.replace(&without_zone, "$1").trim().to_string()
}
