//! JSON output writer.

use std::io::Write;

use super::JsonRecord;
use crate::Record;
use crate::error::Result;

/// Writes records to `writer` as a JSON array.
///
/// # Format
/// ```json
/// [
///   {
///     "from": "49231971134",
///     "message": "Hello",
///     "sid": "4125425345",
///     "time": "2015-06-22T09:12:45",
///     "to": "12129876543"
///   }
/// ]
/// ```
pub fn write_json<W: Write>(records: &[Record], mut writer: W, pretty: bool) -> Result<()> {
    let json = to_json(records, pretty)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[Record], pretty: bool) -> Result<String> {
    let json_records: Vec<JsonRecord<'_>> = records.iter().map(JsonRecord::from).collect();

    let json = if pretty {
        serde_json::to_string_pretty(&json_records)?
    } else {
        serde_json::to_string(&json_records)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("4125425345", "49231971134", "12129876543", "Message A. Message B.", "2015-06-22T09:12:45"),
            Record::new("00a12df6", "12124521214", "14159991234", "This is a sample text", "2015-04-23T04:55:12"),
        ]
    }

    #[test]
    fn test_to_json_keys() {
        let json = to_json(&sample(), true).unwrap();

        assert!(json.contains(r#""from": "49231971134""#));
        assert!(json.contains(r#""to": "12129876543""#));
        assert!(json.contains(r#""sid": "4125425345""#));
        assert!(json.contains(r#""message": "Message A. Message B.""#));
        assert!(json.contains(r#""time": "2015-06-22T09:12:45""#));
    }

    #[test]
    fn test_to_json_key_order_is_alphabetical() {
        let json = to_json(&sample()[..1], false).unwrap();
        assert_eq!(
            json,
            r#"[{"from":"49231971134","message":"Message A. Message B.","sid":"4125425345","time":"2015-06-22T09:12:45","to":"12129876543"}]"#
        );
    }

    #[test]
    fn test_to_json_pretty_uses_two_spaces() {
        let json = to_json(&sample(), true).unwrap();
        assert!(json.starts_with("[\n  {\n    \"from\""));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], true).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_to_buffer() {
        let mut buffer = Vec::new();
        write_json(&sample(), &mut buffer, true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["sid"], "00a12df6");
    }
}
