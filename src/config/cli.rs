//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// variates - generate random variates from classical distributions
#[derive(Parser, Debug, Clone)]
#[command(name = "variates")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Distribution to sample (e.g. normal, gamma, binomial)
    ///
    /// Optional when --config provides a [distribution] table.
    #[arg(value_name = "DISTRIBUTION")]
    pub distribution: Option<String>,

    // === Distribution Options ===
    /// Distribution parameter as name=value (repeatable, e.g. -p shape=2.5)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Chi-square sampling path
    #[arg(long, value_enum)]
    pub chi_method: Option<ChiMethod>,

    // === Run Options ===
    /// Number of samples (e.g. 1000, 10k, 2m)
    #[arg(short = 'n', long)]
    pub count: Option<String>,

    /// Base seed for reproducible output
    #[arg(long, env = "VARIATES_SEED")]
    pub seed: Option<u64>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Remap samples onto this mean (requires --normalize-stdev)
    #[arg(long, allow_negative_numbers = true)]
    pub normalize_mean: Option<f64>,

    /// Remap samples onto this standard deviation (requires --normalize-mean)
    #[arg(long)]
    pub normalize_stdev: Option<f64>,

    // === Output Options ===
    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<Format>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Append summary statistics
    #[arg(long)]
    pub summary: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without sampling
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One value per line
    Text,
    /// index,value with header
    Csv,
    /// Samples, summary and expected moments
    Json,
}

/// Chi-square sampling path
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChiMethod {
    /// 2 * Gamma(N / 2)
    Gamma,
    /// Sum of N squared uniforms
    #[value(name = "squared_uniform_sum")]
    SquaredUniformSum,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.distribution.is_none() && self.config.is_none() {
            anyhow::bail!("must specify a distribution or --config");
        }

        if self.workers == Some(0) {
            anyhow::bail!("workers must be at least 1");
        }

        if self.normalize_mean.is_some() != self.normalize_stdev.is_some() {
            anyhow::bail!("--normalize-mean and --normalize-stdev must be given together");
        }

        Ok(())
    }
}
