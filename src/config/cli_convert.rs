//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::{DistributionConfig, OutputFormat};
use crate::distribution::chi_square::ChiSquareMethod;
use anyhow::{Context, Result};
use ::toml::{Table, Value};

/// Parse a count string (e.g., "500", "10k", "2m") to a sample count
///
/// Suffixes are decimal: `k` = 1,000 and `m` = 1,000,000.
pub fn parse_count(s: &str) -> Result<usize> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if let Some(num) = s.strip_suffix('k') {
        (num, 1_000usize)
    } else if let Some(num) = s.strip_suffix('m') {
        (num, 1_000_000)
    } else {
        (s.as_str(), 1)
    };

    let num: usize = num_str
        .parse()
        .with_context(|| format!("Invalid count format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Count too large: {}", s))
}

/// Parse one `name=value` parameter
///
/// Integers stay integers (so `trials=10` fills an integer field), other
/// numbers become floats and anything else is kept as a string.
pub fn parse_param(s: &str) -> Result<(String, Value)> {
    let (name, value) = s
        .split_once('=')
        .with_context(|| format!("Invalid parameter (expected name=value): {}", s))?;

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Invalid parameter (empty name): {}", s);
    }

    let value = value.trim();
    let value = if let Ok(int) = value.parse::<i64>() {
        Value::Integer(int)
    } else if let Ok(float) = value.parse::<f64>() {
        Value::Float(float)
    } else {
        Value::String(value.to_string())
    };

    Ok((name.to_string(), value))
}

/// Build a distribution from its name and `name=value` parameters
pub fn distribution_from_parts(name: &str, params: &[String]) -> Result<DistributionConfig> {
    let name = name.trim().to_lowercase().replace('-', "_");
    if !DistributionConfig::NAMES.contains(&name.as_str()) {
        anyhow::bail!(
            "Unknown distribution: {} (expected one of: {})",
            name,
            DistributionConfig::NAMES.join(", ")
        );
    }

    let mut table = Table::new();
    table.insert("type".to_string(), Value::String(name));
    apply_to_table(table, params)
}

/// Override parameters of an existing distribution
pub fn apply_params(dist: &DistributionConfig, params: &[String]) -> Result<DistributionConfig> {
    if params.is_empty() {
        return Ok(dist.clone());
    }
    apply_to_table(to_table(dist)?, params)
}

fn to_table(dist: &DistributionConfig) -> Result<Table> {
    match Value::try_from(dist).context("Failed to serialize distribution")? {
        Value::Table(table) => Ok(table),
        other => anyhow::bail!("Distribution serialized to {} instead of a table", other.type_str()),
    }
}

fn apply_to_table(mut table: Table, params: &[String]) -> Result<DistributionConfig> {
    let mut given = Vec::with_capacity(params.len());
    for param in params {
        let (name, value) = parse_param(param)?;
        if name == "type" {
            anyhow::bail!("Distribution type cannot be set as a parameter");
        }
        table.insert(name.clone(), value);
        given.push(name);
    }

    let dist: DistributionConfig = Value::Table(table)
        .try_into()
        .context("Invalid distribution parameters")?;

    // Serde ignores extra keys; a typo must not be silently dropped
    let known = to_table(&dist)?;
    for name in given {
        if !known.contains_key(&name) {
            anyhow::bail!("Unknown parameter '{}' for {}", name, dist.name());
        }
    }

    Ok(dist)
}

/// Convert CLI Format to config OutputFormat
pub fn convert_output_format(cli_format: cli::Format) -> OutputFormat {
    match cli_format {
        cli::Format::Text => OutputFormat::Text,
        cli::Format::Csv => OutputFormat::Csv,
        cli::Format::Json => OutputFormat::Json,
    }
}

/// Convert CLI ChiMethod to ChiSquareMethod
pub fn convert_chi_method(cli_method: cli::ChiMethod) -> ChiSquareMethod {
    match cli_method {
        cli::ChiMethod::Gamma => ChiSquareMethod::Gamma,
        cli::ChiMethod::SquaredUniformSum => ChiSquareMethod::SquaredUniformSum,
    }
}
