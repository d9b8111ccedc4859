//! Chi-square distribution with N degrees of freedom
//!
//! # Two sampling paths
//!
//! - [`ChiSquare::sample_gamma`]: `2 * Gamma(N / 2)`. This is the textbook
//!   chi-square variate and the one StudentT and FisherF build on.
//! - [`ChiSquare::sample_squared_uniform_sum`]: the sum of N squared raw
//!   uniform draws. This does **not** follow the chi-square law (the
//!   textbook construction squares standard normals, not uniforms); its
//!   mean is N/3. It is kept for callers that depend on its output.
//!
//! [`ChiSquareMethod`] selects the path used by `sample`. The default is
//! [`ChiSquareMethod::Gamma`]. Mean and variance always describe the
//! chi-square law.

use super::gamma::Gamma;
use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Path used by [`ChiSquare`]'s `sample`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChiSquareMethod {
    /// `2 * Gamma(N / 2)`
    #[default]
    Gamma,
    /// Sum of `round(N)` squared uniforms (at least one)
    SquaredUniformSum,
}

#[derive(Debug, Clone)]
pub struct ChiSquare {
    dof: f64,
    method: ChiSquareMethod,
    /// Owned Gamma(N / 2), rebuilt when `dof` changes
    gamma: Gamma,
}

impl ChiSquare {
    /// # Errors
    ///
    /// Fails unless `dof > 0`.
    pub fn new(dof: f64) -> Result<Self> {
        Self::with_method(dof, ChiSquareMethod::default())
    }

    pub fn with_method(dof: f64, method: ChiSquareMethod) -> Result<Self> {
        let dof = positive("dof", dof)?;
        Ok(Self {
            dof,
            method,
            gamma: Gamma::new(dof / 2.0)?,
        })
    }

    pub fn dof(&self) -> f64 {
        self.dof
    }

    pub fn method(&self) -> ChiSquareMethod {
        self.method
    }

    pub fn set_dof(&mut self, dof: f64) -> Result<()> {
        let dof = positive("dof", dof)?;
        self.gamma = Gamma::new(dof / 2.0)?;
        self.dof = dof;
        debug!(dof, "chi-square gamma rebuilt");
        Ok(())
    }

    pub fn set_method(&mut self, method: ChiSquareMethod) {
        self.method = method;
    }

    /// Chi-square variate via the owned Gamma(N / 2)
    pub fn sample_gamma(&mut self, src: &mut dyn UniformSource) -> f64 {
        2.0 * self.gamma.sample(src)
    }

    /// Sum of `round(N)` squared raw uniforms (not chi-square distributed)
    pub fn sample_squared_uniform_sum(&mut self, src: &mut dyn UniformSource) -> f64 {
        let terms = self.dof.round().max(1.0) as u64;
        (0..terms)
            .map(|_| {
                let u = src.next_f64();
                u * u
            })
            .sum()
    }
}

impl Distribution for ChiSquare {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        match self.method {
            ChiSquareMethod::Gamma => self.sample_gamma(src),
            ChiSquareMethod::SquaredUniformSum => self.sample_squared_uniform_sum(src),
        }
    }

    fn name(&self) -> &'static str {
        "chi_square"
    }

    fn mean(&self) -> Option<f64> {
        Some(self.dof)
    }

    fn variance(&self) -> Option<f64> {
        Some(2.0 * self.dof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::{moments, Scripted};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chi_square_gamma_path_moments() {
        let (mean, var) = moments(ChiSquare::new(4.0).unwrap(), 5, 300_000);
        assert_abs_diff_eq!(mean, 4.0, epsilon = 0.03);
        assert_abs_diff_eq!(var, 8.0, epsilon = 0.15);
    }

    #[test]
    fn test_chi_square_small_dof() {
        // dof = 1 drives the N <= 1 Gamma branch
        let (mean, _) = moments(ChiSquare::new(1.0).unwrap(), 6, 300_000);
        assert_abs_diff_eq!(mean, 1.0, epsilon = 0.015);
    }

    #[test]
    fn test_chi_square_uniform_sum_path() {
        let mut chi = ChiSquare::with_method(3.0, ChiSquareMethod::SquaredUniformSum).unwrap();
        let mut src = Scripted::new(&[0.5, 0.5, 0.5]);
        assert_abs_diff_eq!(chi.sample(&mut src), 0.75, epsilon = 1e-12);

        let chi = ChiSquare::with_method(6.0, ChiSquareMethod::SquaredUniformSum).unwrap();
        let (mean, _) = moments(chi, 7, 100_000);
        // E[u²] = 1/3, so the mean is N/3 rather than N
        assert_abs_diff_eq!(mean, 2.0, epsilon = 0.02);
    }

    #[test]
    fn test_chi_square_set_dof_rebuilds_gamma() {
        let mut chi = ChiSquare::new(2.0).unwrap();
        chi.set_dof(10.0).unwrap();
        assert_eq!(chi.gamma.shape(), 5.0);
        assert!(chi.set_dof(0.0).is_err());
        assert_eq!(chi.dof(), 10.0);
        assert_eq!(chi.gamma.shape(), 5.0);
    }

    #[test]
    fn test_chi_square_explicit_paths_independent_of_method() {
        let mut chi = ChiSquare::with_method(2.0, ChiSquareMethod::SquaredUniformSum).unwrap();
        let mut src = Scripted::new(&[0.5]);
        assert_abs_diff_eq!(chi.sample_squared_uniform_sum(&mut src), 0.5, epsilon = 1e-12);
        chi.set_method(ChiSquareMethod::Gamma);
        assert_eq!(chi.method(), ChiSquareMethod::Gamma);
    }
}
