//! Configuration validation

use super::*;
use crate::source::XoshiroSource;
use anyhow::{Context, Result};
use tracing::warn;

/// Largest number of samples a single run will hold in memory
pub const MAX_COUNT: usize = u32::MAX as usize;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_distribution(&config.distribution)?;
    validate_run(&config.run)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate distribution parameters by building the distribution once
///
/// Surfaces parameter errors before any worker starts.
pub fn validate_distribution(dist: &DistributionConfig) -> Result<()> {
    dist.build_sampler(XoshiroSource::seeded(0))
        .with_context(|| format!("Invalid {} distribution", dist.name()))?;

    if let DistributionConfig::ChiSquare {
        method: ChiSquareMethod::SquaredUniformSum,
        ..
    } = dist
    {
        warn!("squared_uniform_sum does not follow the chi-square law; its mean is dof / 3");
    }

    Ok(())
}

/// Validate run settings
pub fn validate_run(run: &RunConfig) -> Result<()> {
    if run.count > MAX_COUNT {
        anyhow::bail!("count must be at most {}, got {}", MAX_COUNT, run.count);
    }

    if let Some(workers) = run.workers {
        if workers == 0 {
            anyhow::bail!("workers must be at least 1");
        }
        if workers > run.count.max(1) {
            warn!(workers, count = run.count, "more workers than samples; some will idle");
        }
    }

    if let Some(normalize) = run.normalize {
        if !normalize.mean.is_finite() {
            anyhow::bail!("normalize mean must be finite, got {}", normalize.mean);
        }
        if !normalize.stdev.is_finite() || normalize.stdev < 0.0 {
            anyhow::bail!(
                "normalize stdev must be finite and non-negative, got {}",
                normalize.stdev
            );
        }
    }

    Ok(())
}

/// Validate output settings
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("output path must not be empty");
        }
        if path.is_dir() {
            anyhow::bail!("output path is a directory: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                anyhow::bail!("output directory does not exist: {}", parent.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(distribution: DistributionConfig) -> Config {
        Config {
            distribution,
            run: RunConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_validate_default_config() {
        validate_config(&config(DistributionConfig::Gamma { shape: 0.5 })).unwrap();
    }

    #[test]
    fn test_validate_distribution_params() {
        let err = validate_config(&config(DistributionConfig::Beta {
            alpha: 0.0,
            beta: 1.0,
        }))
        .unwrap_err();
        assert!(format!("{:#}", err).contains("alpha"));

        assert!(validate_distribution(&DistributionConfig::Geometric { p: 0.0 }).is_err());
        assert!(validate_distribution(&DistributionConfig::LogNormal {
            mean: 1.0,
            variance: -1.0
        })
        .is_err());
        validate_distribution(&DistributionConfig::ChiSquare {
            dof: 2.0,
            method: ChiSquareMethod::SquaredUniformSum,
        })
        .unwrap();
    }

    #[test]
    fn test_validate_run() {
        let mut run = RunConfig {
            workers: Some(0),
            ..Default::default()
        };
        assert!(validate_run(&run).is_err());

        run.workers = Some(4);
        validate_run(&run).unwrap();

        run.normalize = Some(NormalizeConfig {
            mean: 0.0,
            stdev: -1.0,
        });
        assert!(validate_run(&run).is_err());

        run.normalize = Some(NormalizeConfig {
            mean: f64::NAN,
            stdev: 1.0,
        });
        assert!(validate_run(&run).is_err());
    }

    #[test]
    fn test_validate_output_paths() {
        let dir = tempfile::tempdir().unwrap();

        let mut output = OutputConfig {
            path: Some(dir.path().join("samples.csv")),
            ..Default::default()
        };
        validate_output(&output).unwrap();

        output.path = Some(dir.path().to_path_buf());
        assert!(validate_output(&output).is_err());

        output.path = Some(dir.path().join("missing").join("samples.csv"));
        assert!(validate_output(&output).is_err());
    }
}
