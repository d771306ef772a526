//! Core processing logic for smsnorm.
//!
//! This module contains:
//! - [`processor`] - Multi-part message merging and statistics
//! - [`output`] - Format writers (JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use smsnorm::core::{ProcessingStats, merge_common_records, to_json, to_jsonl};
//! ```

pub mod output;
pub mod processor;

pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use processor::{ProcessingStats, merge_common_records, merge_common_records_with};
