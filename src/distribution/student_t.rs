//! Student's t distribution with N degrees of freedom
//!
//! # Algorithm
//!
//! - **N <= 2**: composition, `Z / sqrt(X / N)` with `Z` standard normal
//!   and `X` chi-square(N), both from owned sub-distributions.
//! - **N > 2**: rejection from the normal. Draw `a` standard normal,
//!   `b = a² / (N - 2)` and `c = ln(1 - u) / (1 - N/2)` (an exponential
//!   with rate `N/2 - 1`); accept once `exp(-b - c) <= 1 - b`, returning
//!   `a / sqrt((1 - 2/N)(1 - b))`.

use super::chi_square::ChiSquare;
use super::normal::Normal;
use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct StudentT {
    dof: f64,
    normal: Normal,
    /// Owned chi-square(N), rebuilt when `dof` changes
    chi_square: ChiSquare,
}

impl StudentT {
    /// # Errors
    ///
    /// Fails unless `dof > 0`.
    pub fn new(dof: f64) -> Result<Self> {
        let dof = positive("dof", dof)?;
        Ok(Self {
            dof,
            normal: Normal::standard(),
            chi_square: ChiSquare::new(dof)?,
        })
    }

    pub fn dof(&self) -> f64 {
        self.dof
    }

    pub fn set_dof(&mut self, dof: f64) -> Result<()> {
        let dof = positive("dof", dof)?;
        self.chi_square.set_dof(dof)?;
        self.dof = dof;
        debug!(dof, "student t chi-square rebuilt");
        Ok(())
    }
}

impl Distribution for StudentT {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let n = self.dof;
        if n <= 2.0 {
            let z = self.normal.standard_sample(src);
            let x = self.chi_square.sample_gamma(src);
            return z / (x / n).sqrt();
        }

        loop {
            let a = self.normal.standard_sample(src);
            let b = a * a / (n - 2.0);
            let c = (1.0 - src.next_f64()).ln() / (1.0 - n / 2.0);
            if (-b - c).exp() <= 1.0 - b {
                return a / ((1.0 - 2.0 / n) * (1.0 - b)).sqrt();
            }
        }
    }

    fn name(&self) -> &'static str {
        "student_t"
    }

    fn reset_state(&mut self) {
        self.normal.reset_state();
    }

    fn mean(&self) -> Option<f64> {
        (self.dof > 1.0).then_some(0.0)
    }

    fn variance(&self) -> Option<f64> {
        (self.dof > 2.0).then(|| self.dof / (self.dof - 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::moments;
    use crate::distribution::{Generator, Sampler};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_t_rejection_branch_moments() {
        let (mean, var) = moments(StudentT::new(5.0).unwrap(), 15, 400_000);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(var, 5.0 / 3.0, epsilon = 0.05);
    }

    #[test]
    fn test_t_composition_branch_quartiles() {
        // t(2) quartiles are ±sqrt(2/3)
        let mut gen = Generator::with_seed(StudentT::new(2.0).unwrap(), 16);
        let n = 100_000;
        let mut xs: Vec<f64> = (0..n).map(|_| gen.next()).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let q = (2.0f64 / 3.0).sqrt();
        assert!((xs[n / 2]).abs() < 0.025);
        assert!((xs[3 * n / 4] - q).abs() < 0.03);
        assert!((xs[n / 4] + q).abs() < 0.03);
    }

    #[test]
    fn test_t_set_dof_switches_branch() {
        let mut t = StudentT::new(1.0).unwrap();
        assert!(t.mean().is_none());
        t.set_dof(10.0).unwrap();
        assert_eq!(t.chi_square.dof(), 10.0);
        assert_eq!(t.mean(), Some(0.0));
        assert_abs_diff_eq!(t.variance().unwrap(), 1.25);
        assert!(t.set_dof(-1.0).is_err());
        assert_eq!(t.dof(), 10.0);
    }

    #[test]
    fn test_t_finite_samples() {
        let mut gen = Generator::with_seed(StudentT::new(0.5).unwrap(), 17);
        for _ in 0..10_000 {
            assert!(gen.next().is_finite());
        }
    }
}
