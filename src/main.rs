//! # smsnorm CLI
//!
//! Command-line interface for the smsnorm library.
//!
//! The normalized document goes to stdout (or `--output`); logs and skipped
//! row diagnostics go to stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use smsnorm::SmsNormError;
use smsnorm::cli::Args;
use smsnorm::diagnostics::TracingSink;
use smsnorm::pipeline::Normalizer;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the flag-derived level.
fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), SmsNormError> {
    let start = Instant::now();
    let normalizer = Normalizer::new(args.normalizer_config())?;
    let output_config = args.output_config();

    tracing::debug!(
        input = %args.input,
        output = args.output.as_deref().unwrap_or("-"),
        format = %output_config.format,
        region = %normalizer.config().default_region,
        merge = normalizer.config().merge,
        "starting"
    );

    let input: Box<dyn Read> = if args.reads_stdin() {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&args.input)?))
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let stats = normalizer.run(input, output, &output_config, &mut TracingSink)?;

    tracing::info!(
        rows = stats.rows_read,
        skipped = stats.rows_skipped,
        merged = stats.merged_away(),
        written = stats.records_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "done"
    );

    Ok(())
}
