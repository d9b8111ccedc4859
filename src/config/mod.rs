//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! A run is described by three tables:
//!
//! ```toml
//! [distribution]
//! type = "gamma"
//! shape = 2.5
//!
//! [run]
//! count = 100000
//! seed = 42
//! workers = 4
//! normalize = { mean = 0.0, stdev = 1.0 }
//!
//! [output]
//! format = "csv"
//! path = "samples.csv"
//! summary = true
//! ```

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::beta::Beta;
use crate::distribution::binomial::Binomial;
use crate::distribution::cauchy::Cauchy;
use crate::distribution::chi_square::{ChiSquare, ChiSquareMethod};
use crate::distribution::exponential::Exponential;
use crate::distribution::fisher_f::FisherF;
use crate::distribution::gamma::Gamma;
use crate::distribution::geometric::Geometric;
use crate::distribution::logistic::Logistic;
use crate::distribution::lognormal::LogNormal;
use crate::distribution::normal::Normal;
use crate::distribution::pareto::Pareto;
use crate::distribution::poisson::Poisson;
use crate::distribution::power::Power;
use crate::distribution::student_t::StudentT;
use crate::distribution::triangular::Triangular;
use crate::distribution::uniform::Uniform;
use crate::distribution::weibull::Weibull;
use crate::distribution::{Distribution, Generator, Sampler};
use crate::source::UniformSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Distribution and its parameters, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionConfig {
    Uniform {
        #[serde(default)]
        min: f64,
        #[serde(default = "default_one")]
        max: f64,
    },
    Normal {
        #[serde(default)]
        mean: f64,
        #[serde(default = "default_one")]
        stdev: f64,
    },
    Exponential {
        #[serde(default = "default_one")]
        lambda: f64,
    },
    Gamma {
        shape: f64,
    },
    Beta {
        alpha: f64,
        beta: f64,
    },
    ChiSquare {
        dof: f64,
        #[serde(default)]
        method: ChiSquareMethod,
    },
    StudentT {
        dof: f64,
    },
    FisherF {
        n1: f64,
        n2: f64,
    },
    #[serde(rename = "lognormal")]
    LogNormal {
        mean: f64,
        variance: f64,
    },
    Pareto {
        shape: f64,
    },
    Power {
        exponent: f64,
    },
    Weibull {
        alpha: f64,
    },
    Triangular {
        lower: f64,
        upper: f64,
        mode: f64,
    },
    Logistic,
    Cauchy,
    Geometric {
        p: f64,
    },
    Poisson {
        lambda: f64,
    },
    Binomial {
        trials: u64,
        p: f64,
    },
}

fn default_one() -> f64 {
    1.0
}

impl DistributionConfig {
    /// Names accepted as `type`
    pub const NAMES: [&'static str; 18] = [
        "uniform",
        "normal",
        "exponential",
        "gamma",
        "beta",
        "chi_square",
        "student_t",
        "fisher_f",
        "lognormal",
        "pareto",
        "power",
        "weibull",
        "triangular",
        "logistic",
        "cauchy",
        "geometric",
        "poisson",
        "binomial",
    ];

    /// Build a sampler for this distribution driven by `source`
    ///
    /// # Errors
    ///
    /// Returns the parameter error of the underlying constructor.
    pub fn build_sampler<S>(&self, source: S) -> crate::error::Result<Box<dyn Sampler>>
    where
        S: UniformSource + 'static,
    {
        fn boxed<D, S>(dist: D, source: S) -> Box<dyn Sampler>
        where
            D: Distribution + 'static,
            S: UniformSource + 'static,
        {
            Box::new(Generator::with_source(dist, source))
        }

        let sampler = match *self {
            Self::Uniform { min, max } => boxed(Uniform::new(min, max)?, source),
            Self::Normal { mean, stdev } => boxed(Normal::new(mean, stdev)?, source),
            Self::Exponential { lambda } => boxed(Exponential::new(lambda)?, source),
            Self::Gamma { shape } => boxed(Gamma::new(shape)?, source),
            Self::Beta { alpha, beta } => boxed(Beta::new(alpha, beta)?, source),
            Self::ChiSquare { dof, method } => boxed(ChiSquare::with_method(dof, method)?, source),
            Self::StudentT { dof } => boxed(StudentT::new(dof)?, source),
            Self::FisherF { n1, n2 } => boxed(FisherF::new(n1, n2)?, source),
            Self::LogNormal { mean, variance } => boxed(LogNormal::new(mean, variance)?, source),
            Self::Pareto { shape } => boxed(Pareto::new(shape)?, source),
            Self::Power { exponent } => boxed(Power::new(exponent)?, source),
            Self::Weibull { alpha } => boxed(Weibull::new(alpha)?, source),
            Self::Triangular { lower, upper, mode } => {
                boxed(Triangular::new(lower, upper, mode)?, source)
            }
            Self::Logistic => boxed(Logistic::new(), source),
            Self::Cauchy => boxed(Cauchy::new(), source),
            Self::Geometric { p } => boxed(Geometric::new(p)?, source),
            Self::Poisson { lambda } => boxed(Poisson::new(lambda)?, source),
            Self::Binomial { trials, p } => boxed(Binomial::new(trials, p)?, source),
        };
        Ok(sampler)
    }

    /// The `type` tag of this distribution
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "uniform",
            Self::Normal { .. } => "normal",
            Self::Exponential { .. } => "exponential",
            Self::Gamma { .. } => "gamma",
            Self::Beta { .. } => "beta",
            Self::ChiSquare { .. } => "chi_square",
            Self::StudentT { .. } => "student_t",
            Self::FisherF { .. } => "fisher_f",
            Self::LogNormal { .. } => "lognormal",
            Self::Pareto { .. } => "pareto",
            Self::Power { .. } => "power",
            Self::Weibull { .. } => "weibull",
            Self::Triangular { .. } => "triangular",
            Self::Logistic => "logistic",
            Self::Cauchy => "cauchy",
            Self::Geometric { .. } => "geometric",
            Self::Poisson { .. } => "poisson",
            Self::Binomial { .. } => "binomial",
        }
    }
}

impl fmt::Display for DistributionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform { min, max } => write!(f, "uniform(min={}, max={})", min, max),
            Self::Normal { mean, stdev } => write!(f, "normal(mean={}, stdev={})", mean, stdev),
            Self::Exponential { lambda } => write!(f, "exponential(lambda={})", lambda),
            Self::Gamma { shape } => write!(f, "gamma(shape={})", shape),
            Self::Beta { alpha, beta } => write!(f, "beta(alpha={}, beta={})", alpha, beta),
            Self::ChiSquare { dof, method } => {
                write!(f, "chi_square(dof={}, method={:?})", dof, method)
            }
            Self::StudentT { dof } => write!(f, "student_t(dof={})", dof),
            Self::FisherF { n1, n2 } => write!(f, "fisher_f(n1={}, n2={})", n1, n2),
            Self::LogNormal { mean, variance } => {
                write!(f, "lognormal(mean={}, variance={})", mean, variance)
            }
            Self::Pareto { shape } => write!(f, "pareto(shape={})", shape),
            Self::Power { exponent } => write!(f, "power(exponent={})", exponent),
            Self::Weibull { alpha } => write!(f, "weibull(alpha={})", alpha),
            Self::Triangular { lower, upper, mode } => write!(
                f,
                "triangular(lower={}, upper={}, mode={})",
                lower, upper, mode
            ),
            Self::Logistic => write!(f, "logistic"),
            Self::Cauchy => write!(f, "cauchy"),
            Self::Geometric { p } => write!(f, "geometric(p={})", p),
            Self::Poisson { lambda } => write!(f, "poisson(lambda={})", lambda),
            Self::Binomial { trials, p } => write!(f, "binomial(trials={}, p={})", trials, p),
        }
    }
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Total number of samples across all workers
    #[serde(default = "default_count")]
    pub count: usize,
    /// Base seed; worker `i` uses `seed + i`. Entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Worker threads (defaults to the number of CPUs)
    #[serde(default)]
    pub workers: Option<usize>,
    /// Remap every sample onto this location and spread
    #[serde(default)]
    pub normalize: Option<NormalizeConfig>,
}

fn default_count() -> usize {
    10
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
            workers: None,
            normalize: None,
        }
    }
}

impl RunConfig {
    /// Worker count after applying the CPU default
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    pub mean: f64,
    pub stdev: f64,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Write here instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Append summary statistics
    #[serde(default)]
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::XoshiroSource;

    #[test]
    fn test_every_name_round_trips_through_tag() {
        for name in DistributionConfig::NAMES {
            let toml = format!(
                "type = \"{}\"\nshape = 2.0\nalpha = 2.0\nbeta = 3.0\ndof = 5.0\nn1 = 4.0\nn2 = 6.0\nmean = 1.0\nvariance = 0.5\nexponent = 1.5\nlower = 0.0\nupper = 2.0\nmode = 0.5\np = 0.4\nlambda = 3.0\ntrials = 10\n",
                name
            );
            let dist: DistributionConfig = ::toml::from_str(&toml).unwrap();
            assert_eq!(dist.name(), name);

            let sampler = dist.build_sampler(XoshiroSource::seeded(1)).unwrap();
            assert_eq!(sampler.name(), name);
        }
    }

    #[test]
    fn test_defaults() {
        let dist: DistributionConfig = ::toml::from_str("type = \"normal\"").unwrap();
        assert_eq!(dist, DistributionConfig::Normal { mean: 0.0, stdev: 1.0 });

        let dist: DistributionConfig =
            ::toml::from_str("type = \"chi_square\"\ndof = 3").unwrap();
        assert_eq!(
            dist,
            DistributionConfig::ChiSquare {
                dof: 3.0,
                method: ChiSquareMethod::Gamma
            }
        );
    }

    #[test]
    fn test_build_sampler_rejects_bad_params() {
        let dist = DistributionConfig::Gamma { shape: -1.0 };
        assert!(dist.build_sampler(XoshiroSource::seeded(1)).is_err());

        let dist = DistributionConfig::Triangular {
            lower: 0.0,
            upper: 1.0,
            mode: 2.0,
        };
        assert!(dist.build_sampler(XoshiroSource::seeded(1)).is_err());
    }

    #[test]
    fn test_display() {
        let dist = DistributionConfig::Binomial { trials: 20, p: 0.25 };
        assert_eq!(dist.to_string(), "binomial(trials=20, p=0.25)");
        assert_eq!(DistributionConfig::Cauchy.to_string(), "cauchy");
    }

    #[test]
    fn test_effective_workers() {
        let run = RunConfig {
            workers: Some(3),
            ..Default::default()
        };
        assert_eq!(run.effective_workers(), 3);
        assert!(RunConfig::default().effective_workers() >= 1);
    }
}
