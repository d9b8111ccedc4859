//! Human-readable text output

use crate::config::Config;
use crate::worker::RunResult;
use crate::Result;
use std::io::Write;

/// Write one sample per line, then the summary block if requested
pub fn write_text<W: Write>(
    out: &mut W,
    result: &RunResult,
    config: &Config,
    summary: bool,
) -> Result<()> {
    for value in &result.samples {
        writeln!(out, "{}", value)?;
    }
    if summary {
        write_summary(out, result, config)?;
    }
    Ok(())
}

/// Write the summary as `#`-prefixed lines
///
/// The prefix keeps a text stream with a summary readable by tools that
/// skip comment lines.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let stats = &result.stats;
    writeln!(out, "# ═══════════════════════════════════════════════════════")?;
    writeln!(out, "# {}", config.distribution)?;
    writeln!(out, "# ═══════════════════════════════════════════════════════")?;
    writeln!(out, "#   Samples:  {}", format_number(stats.count()))?;
    writeln!(out, "#   Workers:  {}", result.workers)?;
    if let Some(seed) = config.run.seed {
        writeln!(out, "#   Seed:     {}", seed)?;
    }
    writeln!(out, "#   Elapsed:  {:.3}s", result.elapsed.as_secs_f64())?;
    writeln!(out, "#")?;
    writeln!(
        out,
        "#   Mean:     {:.6}{}",
        stats.mean(),
        format_expected(result.expected_mean)
    )?;
    writeln!(
        out,
        "#   Variance: {:.6}{}",
        stats.variance(),
        format_expected(result.expected_variance)
    )?;
    writeln!(out, "#   Stdev:    {:.6}", stats.stdev())?;
    if let (Some(min), Some(max)) = (stats.min(), stats.max()) {
        writeln!(out, "#   Min:      {:.6}", min)?;
        writeln!(out, "#   Max:      {:.6}", max)?;
    }
    if let Some(n) = config.run.normalize {
        writeln!(out, "#   Normalized to mean {} and stdev {}", n.mean, n.stdev)?;
    }
    Ok(())
}

fn format_expected(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("  (expected {:.6})", v),
        Some(_) => "  (expected: infinite)".to_string(),
        None => "  (expected: undefined)".to_string(),
    }
}

/// Format a count with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
