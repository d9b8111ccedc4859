//! Result output
//!
//! Writes the samples of a run, and optionally its summary statistics, in
//! one of three formats:
//!
//! - **text**: one value per line, summary as a `#`-prefixed block
//! - **csv**: `index,value` rows; the summary goes to a sibling
//!   `<stem>.summary.csv` (or to stderr when writing to stdout)
//! - **json**: a single document with samples, summary and expected moments

pub mod csv;
pub mod json;
pub mod text;

use crate::config::{Config, OutputFormat};
use crate::worker::RunResult;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write a run's results as configured in `config.output`
pub fn write_results(result: &RunResult, config: &Config) -> Result<()> {
    match config.output.path {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_to(&mut out, result, config, Some(path))?;
            out.flush()?;
            info!(path = %path.display(), format = %config.output.format, "results written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_to(&mut out, result, config, None)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn write_to<W: Write>(
    out: &mut W,
    result: &RunResult,
    config: &Config,
    path: Option<&Path>,
) -> Result<()> {
    let summary = config.output.summary;
    match config.output.format {
        OutputFormat::Text => text::write_text(out, result, config, summary),
        OutputFormat::Json => json::write_json(out, result, config, summary),
        OutputFormat::Csv => {
            csv::write_samples(out, &result.samples)?;
            if summary {
                match path {
                    Some(path) => {
                        let summary_path = csv_summary_path(path);
                        let mut file = File::create(&summary_path).with_context(|| {
                            format!("Failed to create summary file: {}", summary_path.display())
                        })?;
                        csv::write_summary(&mut file, result, config)?;
                    }
                    None => text::write_summary(&mut io::stderr().lock(), result, config)?,
                }
            }
            Ok(())
        }
    }
}

/// `out/samples.csv` -> `out/samples.summary.csv`
pub fn csv_summary_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "samples".to_string());
    path.with_file_name(format!("{}.summary.csv", stem))
}
