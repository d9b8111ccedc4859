//! CSV output formatting
//!
//! Samples are written as `index,value` rows under a header, ready for
//! pandas, R or a spreadsheet. The summary is a separate two-column
//! `statistic,value` table.

use crate::config::Config;
use crate::worker::RunResult;
use crate::Result;
use std::io::Write;

/// Write the samples with an `index,value` header
pub fn write_samples<W: Write>(out: &mut W, samples: &[f64]) -> Result<()> {
    writeln!(out, "index,value")?;
    for (index, value) in samples.iter().enumerate() {
        writeln!(out, "{},{}", index, value)?;
    }
    Ok(())
}

/// Write the summary as `statistic,value` rows
///
/// Undefined values (empty run, no closed-form moment) are left empty.
pub fn write_summary<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let stats = &result.stats;
    writeln!(out, "statistic,value")?;
    writeln!(out, "distribution,{}", config.distribution.name())?;
    writeln!(out, "count,{}", stats.count())?;
    writeln!(out, "workers,{}", result.workers)?;
    writeln!(out, "seed,{}", optional_u64(config.run.seed))?;
    writeln!(out, "mean,{}", stats.mean())?;
    writeln!(out, "variance,{}", stats.variance())?;
    writeln!(out, "stdev,{}", stats.stdev())?;
    writeln!(out, "min,{}", optional(stats.min()))?;
    writeln!(out, "max,{}", optional(stats.max()))?;
    writeln!(out, "expected_mean,{}", optional(result.expected_mean))?;
    writeln!(out, "expected_variance,{}", optional(result.expected_variance))?;
    writeln!(out, "elapsed_sec,{:.6}", result.elapsed.as_secs_f64())?;
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn optional_u64(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
