//! Tests for output writers (JSON, JSONL) writing to real files

use smsnorm::Record;
use smsnorm::config::OutputConfig;
use smsnorm::core::output::{write_json, write_jsonl};
use smsnorm::format::{OutputFormat, write_to_format};
use std::fs::{self, File};
use tempfile::tempdir;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("00a12df6", "12124521214", "14159991234", "Hello!", "2015-04-23T04:55:12"),
        Record::new("4125425345", "49231971134", "12129876543", "Message A. Message B.", "2015-06-22T09:12:45"),
        Record::new("1b2c3d4e", "12129876543", "14125425345", "Привет! 🎉 \"quoted\"", "2015-01-01T00:00:00"),
    ]
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_records(), File::create(&path).unwrap(), true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#""sid": "00a12df6""#));
        assert!(content.contains(r#""message": "Hello!""#));
        assert!(content.ends_with("]\n"));
    }

    #[test]
    fn test_write_json_is_parseable_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_records(), File::create(&path).unwrap(), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[1]["to"], "12129876543");
        assert_eq!(array[1]["time"], "2015-06-22T09:12:45");
    }

    #[test]
    fn test_write_json_empty_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&[], File::create(&path).unwrap(), true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn test_write_json_unicode_and_escaping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_records(), File::create(&path).unwrap(), true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Привет! 🎉"));
        assert!(content.contains(r#"\"quoted\""#));
    }

    #[test]
    fn test_write_json_record_has_exactly_five_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_records(), File::create(&path).unwrap(), true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let object = value[0].as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["from", "message", "sid", "time", "to"]);
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_one_object_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(&sample_records(), File::create(&path).unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.is_object());
        }
    }

    #[test]
    fn test_write_jsonl_empty_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(&[], File::create(&path).unwrap()).unwrap();

        assert!(fs::read_to_string(&path).unwrap().is_empty());
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_dispatch_tests {
    use super::*;

    #[test]
    fn test_write_to_format_uses_path_extension() {
        let dir = tempdir().unwrap();

        for format in OutputFormat::all() {
            let path = dir.path().join(format!("output.{}", format.extension()));
            let detected = OutputFormat::from_path(path.to_str().unwrap()).unwrap();
            assert_eq!(detected, *format);

            let config = OutputConfig::new().with_format(detected);
            write_to_format(&sample_records(), File::create(&path).unwrap(), &config).unwrap();

            let content = fs::read_to_string(&path).unwrap();
            assert!(content.contains("00a12df6"), "missing record in {}", format);
        }
    }
}
