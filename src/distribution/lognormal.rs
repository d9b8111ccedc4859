//! Log-normal distribution
//!
//! Parameterized by the mean `m` and variance `v` of the log-normal itself.
//! The owned [`Normal`] carries the log-space parameters
//!
//! ```text
//! σ² = ln(1 + v / m²)
//! μ  = ln(m) - σ² / 2
//! ```
//!
//! and `sample` returns `exp(normal)`. The log-space parameters can also be
//! set directly, in which case the public mean and variance are recomputed
//! from them. Every setter computes the full new state first and commits it
//! in one step, so neither side is ever derived from a stale value.

use super::normal::Normal;
use super::Distribution;
use crate::error::{finite, non_negative, positive, Result, SamplerError};
use crate::source::UniformSource;

#[derive(Debug, Clone)]
pub struct LogNormal {
    mean: f64,
    variance: f64,
    normal: Normal,
}

/// Log-space `(μ, σ)` for a log-normal with mean `m` and variance `v`
///
/// `v / m²` is evaluated as `(v / m) / m` so a tiny mean does not underflow
/// to zero.
fn to_log_space(m: f64, v: f64) -> Result<(f64, f64)> {
    let sigma2 = ((v / m) / m).ln_1p();
    if !sigma2.is_finite() {
        return Err(SamplerError::invalid(
            "variance",
            v,
            "variance / mean² is not representable",
        ));
    }
    Ok((m.ln() - sigma2 / 2.0, sigma2.sqrt()))
}

/// Mean and variance of `exp(N(μ, σ²))`
fn from_log_space(mu: f64, sigma: f64) -> (f64, f64) {
    let sigma2 = sigma * sigma;
    let mean = (mu + sigma2 / 2.0).exp();
    let variance = sigma2.exp_m1() * (2.0 * mu + sigma2).exp();
    (mean, variance)
}

impl LogNormal {
    /// # Errors
    ///
    /// Fails unless `mean > 0` and `variance >= 0`.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        let mean = positive("mean", mean)?;
        let variance = non_negative("variance", variance)?;
        let (mu, sigma) = to_log_space(mean, variance)?;
        Ok(Self {
            mean,
            variance,
            normal: Normal::new(mu, sigma)?,
        })
    }

    /// Log-normal whose logarithm is `N(mu, sigma²)`
    pub fn from_log_params(mu: f64, sigma: f64) -> Result<Self> {
        let normal = Normal::new(mu, sigma)?;
        let (mean, variance) = from_log_space(mu, sigma);
        Ok(Self {
            mean,
            variance,
            normal,
        })
    }

    pub fn mean_param(&self) -> f64 {
        self.mean
    }

    pub fn variance_param(&self) -> f64 {
        self.variance
    }

    /// Mean of the underlying normal
    pub fn mu(&self) -> f64 {
        self.normal.mu()
    }

    /// Standard deviation of the underlying normal
    pub fn sigma(&self) -> f64 {
        self.normal.sigma()
    }

    pub fn set_mean(&mut self, mean: f64) -> Result<()> {
        let mean = positive("mean", mean)?;
        self.commit_moments(mean, self.variance)
    }

    pub fn set_variance(&mut self, variance: f64) -> Result<()> {
        let variance = non_negative("variance", variance)?;
        self.commit_moments(self.mean, variance)
    }

    pub fn set_mu(&mut self, mu: f64) -> Result<()> {
        let mu = finite("mu", mu)?;
        self.commit_log_params(mu, self.normal.sigma())
    }

    pub fn set_sigma(&mut self, sigma: f64) -> Result<()> {
        let sigma = non_negative("sigma", sigma)?;
        self.commit_log_params(self.normal.mu(), sigma)
    }

    fn commit_moments(&mut self, mean: f64, variance: f64) -> Result<()> {
        let (mu, sigma) = to_log_space(mean, variance)?;
        self.push_log_params(mu, sigma)?;
        self.mean = mean;
        self.variance = variance;
        Ok(())
    }

    /// Update the owned normal, keeping its spare
    fn push_log_params(&mut self, mu: f64, sigma: f64) -> Result<()> {
        let mut normal = self.normal.clone();
        normal.set_mean(mu)?;
        normal.set_stdev(sigma)?;
        self.normal = normal;
        Ok(())
    }

    fn commit_log_params(&mut self, mu: f64, sigma: f64) -> Result<()> {
        let (mean, variance) = from_log_space(mu, sigma);
        self.push_log_params(mu, sigma)?;
        self.mean = mean;
        self.variance = variance;
        Ok(())
    }
}

impl Distribution for LogNormal {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        self.normal.sample(src).exp()
    }

    fn name(&self) -> &'static str {
        "lognormal"
    }

    fn reset_state(&mut self) {
        self.normal.reset_state();
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mean)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.variance)
    }
}
