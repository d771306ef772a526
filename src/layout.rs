//! Row layouts and layout detection.
//!
//! SMS exports come in two column arrangements:
//!
//! | Layout | Columns |
//! |--------|---------|
//! | A | `sender, receiver, message..., datetime, id` |
//! | B | `weekday, datetime, id, sender, receiver, message...` |
//!
//! Message text may span several columns (it is split on unquoted commas), so
//! each layout describes its fields as offsets from the start or the end of
//! the row rather than as fixed positions.
//!
//! Rows carry no layout tag. [`classify`] guesses: if the first two fields are
//! both valid phone numbers the row is layout A, otherwise B. A layout A row
//! with a malformed sender or receiver is therefore read as layout B (and then
//! usually fails to normalize).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::normalize::PhoneNormalizer;

/// A raw CSV row: the tokenized fields of one input line.
pub type RawRow = Vec<String>;

/// Position of a single field in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Zero-based index from the start of the row
    Head(usize),
    /// One-based index from the end of the row (`Tail(1)` is the last field)
    Tail(usize),
}

impl Field {
    /// Resolves the field against a row.
    pub fn get<'a, S: AsRef<str>>(self, row: &'a [S]) -> Option<&'a str> {
        let index = match self {
            Field::Head(i) => i,
            Field::Tail(i) => row.len().checked_sub(i)?,
        };
        row.get(index).map(AsRef::as_ref)
    }
}

/// A run of fields: from `start` up to (excluding) the last `tail` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub tail: usize,
}

impl Span {
    /// Returns the index range this span covers in a row of `len` fields.
    pub fn range(self, len: usize) -> Range<usize> {
        let end = len.saturating_sub(self.tail).max(self.start);
        self.start..end
    }

    /// Joins the covered fields with `separator`.
    pub fn join<S: AsRef<str>>(self, row: &[S], separator: &str) -> String {
        let range = self.range(row.len());
        row.get(range)
            .unwrap_or_default()
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(separator)
    }
}

/// Where each logical field lives in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub sender: Field,
    pub receiver: Field,
    pub id: Field,
    /// Fields that together make up the timestamp, joined with a space
    pub datetime: &'static [Field],
    pub message: Span,
    /// Smallest row this layout can be read from
    pub min_fields: usize,
}

const LAYOUT_A: FieldMap = FieldMap {
    sender: Field::Head(0),
    receiver: Field::Head(1),
    id: Field::Tail(1),
    datetime: &[Field::Tail(2)],
    message: Span { start: 2, tail: 2 },
    min_fields: 4,
};

const LAYOUT_B: FieldMap = FieldMap {
    sender: Field::Head(3),
    receiver: Field::Head(4),
    id: Field::Head(2),
    datetime: &[Field::Head(0), Field::Head(1)],
    message: Span { start: 5, tail: 0 },
    min_fields: 5,
};

/// The two known row layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// `sender, receiver, message..., datetime, id`
    A,
    /// `weekday, datetime, id, sender, receiver, message...`
    B,
}

impl Layout {
    /// Returns the field map for this layout.
    pub fn fields(self) -> &'static FieldMap {
        match self {
            Layout::A => &LAYOUT_A,
            Layout::B => &LAYOUT_B,
        }
    }

    /// Minimum number of fields a row needs for this layout.
    pub fn min_fields(self) -> usize {
        self.fields().min_fields
    }

    /// Extracts the raw id, if the row is long enough to have one.
    pub fn id<S: AsRef<str>>(self, row: &[S]) -> Option<&str> {
        if row.len() < self.min_fields() {
            return None;
        }
        self.fields().id.get(row)
    }

    /// Returns all available layouts.
    pub fn all() -> &'static [Layout] {
        &[Layout::A, Layout::B]
    }

    /// Field count of the shortest row any layout accepts.
    pub fn shortest() -> usize {
        Layout::all()
            .iter()
            .map(|layout| layout.min_fields())
            .min()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::A => write!(f, "A"),
            Layout::B => write!(f, "B"),
        }
    }
}

/// Decides which layout a row uses.
///
/// A layout A row with an invalid sender or receiver is classified as B.
///
/// # Example
///
/// ```rust
/// use smsnorm::layout::{Layout, classify};
/// use smsnorm::normalize::PhoneNormalizer;
///
/// let phones = PhoneNormalizer::default();
/// let row = ["Mon", "Jun 22 2015 09:12:45 GMT", "4125425345", "+49231971134", "+12129876543", "Hi"];
/// assert_eq!(classify(&row, &phones), Layout::B);
/// ```
pub fn classify<S: AsRef<str>>(row: &[S], phones: &PhoneNormalizer) -> Layout {
    let is_phone = |field: Field| field.get(row).is_some_and(|value| phones.is_valid(value));

    if is_phone(Field::Head(0)) && is_phone(Field::Head(1)) {
        Layout::A
    } else {
        Layout::B
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_a() -> Vec<&'static str> {
        vec![
            "(212) 452-1214",
            "(415) 999-1234",
            "This is a sample text",
            "2015-04-23 04:55:12",
            "00a12df6",
        ]
    }

    fn row_b() -> Vec<&'static str> {
        vec![
            "Mon",
            "Jun 22 2015 09:12:45 GMT",
            "4125425345",
            "+49231971134",
            "+12129876543",
            "This is a part 2 of a multipart message",
        ]
    }

    #[test]
    fn test_classify_layout_a() {
        assert_eq!(classify(&row_a(), &PhoneNormalizer::default()), Layout::A);
    }

    #[test]
    fn test_classify_layout_b() {
        assert_eq!(classify(&row_b(), &PhoneNormalizer::default()), Layout::B);
    }

    #[test]
    fn test_classify_falls_back_to_b() {
        let phones = PhoneNormalizer::default();
        assert_eq!(classify::<&str>(&[], &phones), Layout::B);
        assert_eq!(classify(&["(212) 452-1214"], &phones), Layout::B);
        // One bad number is enough to lose layout A
        assert_eq!(
            classify(&["(212) 452-1214", "5555555", "text", "2015-01-01", "id"], &phones),
            Layout::B
        );
    }

    #[test]
    fn test_field_positions() {
        let row = row_a();
        let map = Layout::A.fields();
        assert_eq!(map.sender.get(&row), Some("(212) 452-1214"));
        assert_eq!(map.id.get(&row), Some("00a12df6"));
        assert_eq!(map.datetime[0].get(&row), Some("2015-04-23 04:55:12"));

        let row = row_b();
        let map = Layout::B.fields();
        assert_eq!(map.id.get(&row), Some("4125425345"));
        assert_eq!(map.receiver.get(&row), Some("+12129876543"));
    }

    #[test]
    fn test_tail_out_of_range() {
        assert_eq!(Field::Tail(3).get(&["a", "b"]), None);
        assert_eq!(Field::Tail(0).get(&["a", "b"]), None);
    }

    #[test]
    fn test_message_span_joins_with_separator() {
        let row = ["a", "b", "Hello", " world", "again", "2015-01-01", "id"];
        assert_eq!(Layout::A.fields().message.join(&row, ","), "Hello, world,again");

        let row = ["Mon", "Jun 22 2015", "id", "1", "2", "Part one", " part two"];
        assert_eq!(Layout::B.fields().message.join(&row, ","), "Part one, part two");
    }

    #[test]
    fn test_message_span_may_be_empty() {
        let row = ["a", "b", "2015-01-01", "id"];
        assert_eq!(Layout::A.fields().message.join(&row, ","), "");
        assert_eq!(Span { start: 5, tail: 0 }.range(3), 5..5);
    }

    #[test]
    fn test_id_requires_minimum_length() {
        assert_eq!(Layout::B.id(&["Mon", "Jun 22 2015", "abc"]), None);
        assert_eq!(Layout::A.id(&row_a()), Some("00a12df6"));
    }

    #[test]
    fn test_layout_display() {
        assert_eq!(Layout::A.to_string(), "A");
        assert_eq!(Layout::B.to_string(), "B");
        assert_eq!(Layout::all().len(), 2);
        assert_eq!(Layout::shortest(), 4);
    }
}
