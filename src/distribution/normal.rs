//! Normal (Gaussian) distribution
//!
//! # Algorithm
//!
//! Marsaglia polar method: draw `(r1, r2)` uniformly in the square
//! `[-1, 1]²` until the point falls inside the unit disc (and is not the
//! origin), then `s = sqrt(-2 ln(sum) / sum)` turns it into two independent
//! standard normals `r1 * s` and `r2 * s`.
//!
//! The second value is kept as a spare and returned by the next call, which
//! halves the expected number of rejection loops per sample. The spare is a
//! *standard* normal, so changing mean or stdev in between is safe: the
//! spare is rescaled with the new parameters when it is used.

use super::{polar_pair, Distribution};
use crate::error::{finite, non_negative, Result};
use crate::source::UniformSource;

/// Gaussian distribution with mean `mu` and standard deviation `sigma`
#[derive(Debug, Clone)]
pub struct Normal {
    mu: f64,
    sigma: f64,
    /// Cached second standard normal from the last polar pair
    spare: Option<f64>,
}

impl Normal {
    /// # Errors
    ///
    /// Fails if `mean` is not finite or `stdev` is negative.
    pub fn new(mean: f64, stdev: f64) -> Result<Self> {
        Ok(Self {
            mu: finite("mean", mean)?,
            sigma: non_negative("stdev", stdev)?,
            spare: None,
        })
    }

    /// N(0, 1)
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
            spare: None,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn set_mean(&mut self, mean: f64) -> Result<()> {
        self.mu = finite("mean", mean)?;
        Ok(())
    }

    pub fn set_stdev(&mut self, stdev: f64) -> Result<()> {
        self.sigma = non_negative("stdev", stdev)?;
        Ok(())
    }

    /// Whether the next call will be served from the spare
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Draw one N(0, 1) value, using the spare when available
    pub fn standard_sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }

        let (r1, r2, sum) = polar_pair(src);
        let s = (-2.0 * sum.ln() / sum).sqrt();
        self.spare = Some(r2 * s);
        r1 * s
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution for Normal {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        self.mu + self.sigma * self.standard_sample(src)
    }

    fn name(&self) -> &'static str {
        "normal"
    }

    fn reset_state(&mut self) {
        self.spare = None;
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mu)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.sigma * self.sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::{moments, Scripted};
    use crate::distribution::{Generator, Sampler};
    use crate::source::{CountingSource, XoshiroSource};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normal_standard_moments() {
        let (mean, var) = moments(Normal::standard(), 2024, 1_000_000);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(var, 1.0, epsilon = 0.02);
    }

    #[test]
    fn test_normal_shifted_moments() {
        let (mean, var) = moments(Normal::new(5.0, 3.0).unwrap(), 3, 200_000);
        assert_abs_diff_eq!(mean, 5.0, epsilon = 0.05);
        assert_abs_diff_eq!(var, 9.0, epsilon = 0.15);
    }

    #[test]
    fn test_normal_spare_is_used() {
        let src = CountingSource::new(XoshiroSource::seeded(1));
        let counter = src.counter();
        let mut gen = Generator::with_source(Normal::standard(), src);

        gen.next();
        let after_first = counter.get();
        assert!(after_first >= 2);
        assert!(gen.has_spare());

        gen.next();
        assert_eq!(counter.get(), after_first);
        assert!(!gen.has_spare());
    }

    #[test]
    fn test_normal_polar_values() {
        // (0.75, 0.5) -> r1 = 0.5, r2 = 0.0, sum = 0.25
        let mut normal = Normal::standard();
        let mut src = Scripted::new(&[0.75, 0.5]);
        let s = (-2.0 * 0.25f64.ln() / 0.25).sqrt();
        assert_abs_diff_eq!(normal.sample(&mut src), 0.5 * s, epsilon = 1e-12);
        assert_eq!(normal.sample(&mut src), 0.0);
    }

    #[test]
    fn test_normal_rejects_outside_disc_and_origin() {
        // (1, 1) outside the disc, (0, 0) origin, then (0.75, 0.5) accepted
        let mut normal = Normal::standard();
        let mut src = Scripted::new(&[0.999_999, 0.999_999, 0.5, 0.5, 0.75, 0.5]);
        let s = (-2.0 * 0.25f64.ln() / 0.25).sqrt();
        assert_abs_diff_eq!(normal.sample(&mut src), 0.5 * s, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_spare_survives_parameter_change() {
        let mut normal = Normal::standard();
        let mut src = Scripted::new(&[0.75, 0.75]);
        let first = normal.sample(&mut src);
        normal.set_mean(100.0).unwrap();
        normal.set_stdev(2.0).unwrap();
        // r2 == r1 for this script, so the spare equals the first standard value
        assert_abs_diff_eq!(normal.sample(&mut src), 100.0 + 2.0 * first, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_zero_stdev() {
        let mut gen = Generator::with_seed(Normal::new(3.0, 0.0).unwrap(), 5);
        for _ in 0..10 {
            assert_eq!(gen.next(), 3.0);
        }
    }

    #[test]
    fn test_normal_invalid_stdev() {
        assert!(Normal::new(0.0, -1.0).is_err());
        let mut normal = Normal::standard();
        assert!(normal.set_stdev(-0.5).is_err());
        assert_eq!(normal.sigma(), 1.0);
    }

    #[test]
    fn test_normal_reset_flushes_spare() {
        let mut gen = Generator::with_seed(Normal::standard(), 10);
        gen.next();
        assert!(gen.has_spare());
        gen.reset(Some(10));
        assert!(!gen.has_spare());
    }
}
