//! variates - random variate generators for classical probability distributions
//!
//! Each generator turns a stream of uniform [0, 1) values into samples of one
//! distribution: continuous (uniform, normal, exponential, gamma, beta,
//! chi-square, Student's t, F, log-normal, Pareto, power, Weibull,
//! triangular, logistic, Cauchy) or discrete (Poisson, binomial, geometric).
//!
//! # Architecture
//!
//! - **source**: where uniform values come from (per-thread default engine,
//!   owned seedable engines, closures, counting wrappers)
//! - **distribution**: the sampling algorithms and the [`Sampler`] contract
//! - **batch**: vectors and restartable lazy sequences of samples
//! - **stats**: streaming summary statistics
//! - **config / worker / output**: the command-line front end
//!
//! # Example
//!
//! ```
//! use variates::{Generator, Sampler};
//! use variates::distribution::gamma::Gamma;
//!
//! let mut gen = Generator::with_seed(Gamma::new(2.5)?, 42);
//! let x = gen.next();
//! assert!(x > 0.0);
//! # Ok::<(), variates::SamplerError>(())
//! ```

pub mod batch;
pub mod config;
pub mod distribution;
pub mod error;
pub mod output;
pub mod source;
pub mod stats;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{Distribution, Generator, Sampler};
pub use error::SamplerError;
pub use source::{Seedable, UniformSource};

/// Result type used by the command-line layers
pub type Result<T> = anyhow::Result<T>;
