//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args`] converts into the library's [`NormalizerConfig`] and
//! [`OutputConfig`], so the binary holds no configuration logic of its own.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{NormalizerConfig, OutputConfig};
use crate::normalize::DEFAULT_REGION;

/// Normalize SMS delivery CSV exports (two layouts) into one JSON document.
///
/// Skipped rows are reported on stderr; the JSON goes to stdout or --output.
#[derive(Parser, Debug, Clone)]
#[command(name = "smsnorm")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    smsnorm messages.csv
    smsnorm messages.csv -o normalized.json
    smsnorm messages.csv -o normalized.jsonl
    cat messages.csv | smsnorm --format jsonl
    smsnorm messages.csv --region GB --no-merge")]
pub struct Args {
    /// Path to input CSV file ('-' for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Path to output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format [default: from the --output extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Region assumed for phone numbers without a country code
    #[arg(long, value_name = "CC", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Do not merge multi-part messages that share an id
    #[arg(long)]
    pub no_merge: bool,

    /// Write JSON without indentation
    #[arg(long)]
    pub compact: bool,

    /// Log progress details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the normalizer configuration from the arguments.
    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig::new()
            .with_default_region(self.region.clone())
            .with_merge(!self.no_merge)
    }

    /// Output format: `--format` if given, else inferred from the `--output`
    /// extension, else JSON.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        match (self.format, self.output.as_deref()) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => crate::format::OutputFormat::from_path(path).unwrap_or_default(),
            (None, None) => crate::format::OutputFormat::default(),
        }
    }

    /// Builds the output configuration from the arguments.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new()
            .with_format(self.output_format())
            .with_pretty(!self.compact)
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Returns `true` if input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single JSON array (default)
    #[default]
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
