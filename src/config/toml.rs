//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{
    apply_params, convert_chi_method, convert_output_format, distribution_from_parts, parse_count,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config =
        ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // A distribution named on the command line replaces the file's entirely;
    // bare parameters override the file's values
    if let Some(ref name) = cli.distribution {
        debug!(distribution = %name, "distribution overridden from CLI");
        config.distribution = distribution_from_parts(name, &cli.params)?;
    } else {
        config.distribution = apply_params(&config.distribution, &cli.params)?;
    }

    if let Some(method) = cli.chi_method {
        apply_chi_method(&mut config.distribution, method)?;
    }

    // Override run settings
    if let Some(ref count) = cli.count {
        config.run.count = parse_count(count).context("Invalid count")?;
    }
    if cli.seed.is_some() {
        config.run.seed = cli.seed;
    }
    if cli.workers.is_some() {
        config.run.workers = cli.workers;
    }
    if let (Some(mean), Some(stdev)) = (cli.normalize_mean, cli.normalize_stdev) {
        config.run.normalize = Some(NormalizeConfig { mean, stdev });
    }

    // Override output settings
    if let Some(format) = cli.format {
        config.output.format = convert_output_format(format);
    }
    if let Some(ref path) = cli.output {
        config.output.path = Some(path.clone());
    }
    if cli.summary {
        config.output.summary = true;
    }

    Ok(config)
}

/// Build a configuration from CLI arguments alone
pub fn config_from_cli(cli: &Cli) -> Result<Config> {
    let name = cli
        .distribution
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Distribution name required without --config"))?;

    let config = Config {
        distribution: distribution_from_parts(name, &cli.params)?,
        run: RunConfig::default(),
        output: OutputConfig::default(),
    };

    // Everything but the distribution is an override of the defaults
    let rest = Cli {
        distribution: None,
        params: Vec::new(),
        ..cli.clone()
    };
    merge_cli_with_config(&rest, config)
}

fn apply_chi_method(dist: &mut DistributionConfig, method: cli::ChiMethod) -> Result<()> {
    match dist {
        DistributionConfig::ChiSquare { method: current, .. } => {
            *current = convert_chi_method(method);
            Ok(())
        }
        other => anyhow::bail!("--chi-method only applies to chi_square, not {}", other.name()),
    }
}
