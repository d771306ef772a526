//! JSON Lines (JSONL) output writer.

use std::io::{BufWriter, Write};

use super::JsonRecord;
use crate::Record;
use crate::error::Result;

/// Writes records to `writer` in JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"from":"49231971134","message":"Hello","sid":"4125425345","time":"2015-06-22T09:12:45","to":"12129876543"}
/// ```
pub fn write_jsonl<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    for record in records {
        serde_json::to_writer(&mut writer, &JsonRecord::from(record))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[Record]) -> Result<String> {
    let mut output = String::new();

    for record in records {
        output.push_str(&serde_json::to_string(&JsonRecord::from(record))?);
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_jsonl_one_object_per_line() {
        let records = vec![
            Record::new("a", "1", "2", "first", "2015-01-01T00:00:00"),
            Record::new("b", "3", "4", "second", "2015-01-02T00:00:00"),
        ];

        let jsonl = to_jsonl(&records).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.is_object());
        }
        assert!(lines[1].contains(r#""sid":"b""#));
    }

    #[test]
    fn test_write_jsonl_matches_to_jsonl() {
        let records = vec![Record::new("a", "1", "2", "line, with comma", "2015-01-01T00:00:00")];

        let mut buffer = Vec::new();
        write_jsonl(&records, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), to_jsonl(&records).unwrap());
    }

    #[test]
    fn test_to_jsonl_empty() {
        assert_eq!(to_jsonl(&[]).unwrap(), "");
    }
}
