//! variates CLI entry point

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use variates::config::{cli::Cli, toml as config_toml, validator, Config};
use variates::output::text::format_number;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    cli.validate()?;

    let config_start = Instant::now();
    let config = build_config(&cli)?;
    debug!(elapsed_ms = config_start.elapsed().as_millis() as u64, "config built");

    validator::validate_config(&config).context("Configuration validation failed")?;
    print_configuration(&config);

    if cli.dry_run {
        eprintln!();
        eprintln!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let result = variates::worker::run_parallel(&config)?;
    variates::output::write_results(&result, &config)?;

    info!(
        samples = result.samples.len(),
        elapsed_ms = result.elapsed.as_millis() as u64,
        "done"
    );
    Ok(())
}

/// Logs go to stderr so sample output on stdout stays clean
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build configuration from the config file (if any) merged with CLI overrides
fn build_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => {
            let config = config_toml::parse_toml_file(path)?;
            config_toml::merge_cli_with_config(cli, config)
        }
        None => config_toml::config_from_cli(cli),
    }
}

/// Print the resolved configuration to stderr
fn print_configuration(config: &Config) {
    eprintln!("variates v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("  Distribution: {}", config.distribution);
    eprintln!("  Samples:      {}", format_number(config.run.count as u64));
    eprintln!("  Workers:      {}", config.run.effective_workers());
    match config.run.seed {
        Some(seed) => eprintln!("  Seed:         {}", seed),
        None => eprintln!("  Seed:         entropy"),
    }
    if let Some(n) = config.run.normalize {
        eprintln!("  Normalize:    mean={} stdev={}", n.mean, n.stdev);
    }
    match config.output.path {
        Some(ref path) => eprintln!("  Output:       {} ({})", path.display(), config.output.format),
        None => eprintln!("  Output:       stdout ({})", config.output.format),
    }
}
