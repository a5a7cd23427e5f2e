//! CLI tool that turns a raw product price list into structured JSON or CSV.
//!
//! # Usage
//!
//! ```bash
//! # Parse a listing into pretty JSON
//! parse_products --input products_raw_data.txt --output products_structured_data.json
//!
//! # Read from stdin, write CSV to stdout
//! cat products_raw_data.txt | parse_products --output-format csv > products.csv
//!
//! # Fail when any line could not be parsed
//! parse_products -i products_raw_data.txt --strict
//! ```
//!
//! Unparseable lines are logged as warnings on stderr. Set `RUST_LOG` to
//! change verbosity (default `warn`).

use std::fs::File;
use std::io::{IsTerminal, Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use pricelist::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert a raw price list into structured product records.
///
/// Each input line is either `<price> RUB x<quantity> <name>` or
/// `<price> RUB <name>`. Lines matching neither form are reported and skipped.
#[derive(Parser, Debug)]
#[command(name = "parse_products")]
#[command(version, about)]
struct Args {
    /// Input file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path. If not specified, writes to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format. Defaults to the output file extension, then JSON.
    #[arg(long, value_enum)]
    output_format: Option<FormatArg>,

    /// Write JSON on a single line instead of indenting it.
    #[arg(long)]
    compact: bool,

    /// Exit with an error if any line was skipped.
    #[arg(long)]
    strict: bool,
}

/// Supported output formats for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// JSON array of {name, price, quantity} objects.
    Json,
    /// CSV with a name,price,quantity header.
    Csv,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Csv => Format::Csv,
        }
    }
}

impl Args {
    /// Resolves the effective output format from flags and the output path.
    fn format(&self) -> Format {
        let format = self
            .output_format
            .map(Format::from)
            .or_else(|| self.output.as_deref().and_then(format_from_path))
            .unwrap_or_default();

        match format {
            Format::Json if self.compact => Format::CompactJson,
            other => other,
        }
    }
}

fn format_from_path(path: &Path) -> Option<Format> {
    path.extension().and_then(|ext| ext.to_str()).and_then(Format::from_extension)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let format = args.format();

    // Open input source
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdin().lock()),
    };

    let report = read_report(input).context("Failed to read price list")?;
    info!(records = report.records.len(), skipped = report.skipped.len(), "parsed price list");

    // Open output destination
    let output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout().lock()),
    };

    let count = write_records(output, &report.records, format)?;

    // Report result to stderr (so it doesn't interfere with stdout output)
    eprintln!("Parsed {count} product(s), skipped {} line(s)", report.skipped.len());

    if args.strict && !report.is_clean() {
        bail!("{} line(s) could not be parsed", report.skipped.len());
    }

    Ok(())
}

/// Writes records with runtime format selection.
fn write_records<W: Write>(
    output: W,
    records: &[ProductRecord],
    format: Format,
) -> Result<usize> {
    match format {
        Format::Json => write_typed::<_, Json>(output, records),
        Format::CompactJson => write_typed::<_, CompactJson>(output, records),
        Format::Csv => write_typed::<_, Csv>(output, records),
    }
}

/// Writes the whole record list through a [`ProductWriter`].
fn write_typed<W, F>(output: W, records: &[ProductRecord]) -> Result<usize>
where
    W: Write,
    F: OutputFormat,
{
    let mut writer = ProductWriter::<_, F>::new(output);
    writer.write_records(records).context("Failed to write products")?;
    writer.flush().context("Failed to flush output")?;
    Ok(writer.records_written())
}
