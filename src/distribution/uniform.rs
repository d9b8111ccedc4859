//! Continuous uniform distribution on `[min, max]`
//!
//! # Example
//!
//! ```
//! use variates::distribution::{Generator, Sampler, uniform::Uniform};
//!
//! let mut gen = Generator::with_seed(Uniform::new(-5.0, 5.0).unwrap(), 1);
//! for _ in 0..10 {
//!     let x = gen.next();
//!     assert!((-5.0..=5.0).contains(&x));
//! }
//! ```

use super::Distribution;
use crate::error::{finite, Result};
use crate::source::UniformSource;

/// Interval lengths this close to one skip the multiplication
const UNIT_LENGTH_EPSILON: f64 = 1e-12;

/// Uniform distribution on a closed interval
///
/// The interval is stored exactly as given; an inverted pair is not swapped.
/// Samples are clamped between the two bounds to absorb rounding overshoot.
#[derive(Debug, Clone)]
pub struct Uniform {
    min: f64,
    max: f64,
}

impl Uniform {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Ok(Self {
            min: finite("min", min)?,
            max: finite("max", max)?,
        })
    }

    /// Uniform on [0, 1]
    pub fn standard() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_min(&mut self, min: f64) -> Result<()> {
        self.min = finite("min", min)?;
        Ok(())
    }

    pub fn set_max(&mut self, max: f64) -> Result<()> {
        self.max = finite("max", max)?;
        Ok(())
    }

    fn length(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution for Uniform {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let u = src.next_f64();
        let length = self.length();
        let value = if (length - 1.0).abs() < UNIT_LENGTH_EPSILON {
            u + self.min
        } else {
            u * length + self.min
        };

        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        value.max(lo).min(hi)
    }

    fn name(&self) -> &'static str {
        "uniform"
    }

    fn mean(&self) -> Option<f64> {
        Some((self.min + self.max) / 2.0)
    }

    fn variance(&self) -> Option<f64> {
        let length = self.length();
        Some(length * length / 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::{moments, Scripted};
    use crate::distribution::{Generator, Sampler};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_uniform_bounds() {
        for (min, max) in [(0.0, 1.0), (-3.0, 7.5), (100.0, 100.5), (2.0, 2.0)] {
            let mut gen = Generator::with_seed(Uniform::new(min, max).unwrap(), 42);
            for _ in 0..1000 {
                let x = gen.next();
                assert!(x >= min && x <= max, "{} outside [{}, {}]", x, min, max);
            }
        }
    }

    #[test]
    fn test_uniform_unit_length_shift() {
        let mut uniform = Uniform::new(3.0, 4.0).unwrap();
        let mut src = Scripted::new(&[0.25]);
        assert_eq!(uniform.sample(&mut src), 3.25);
    }

    #[test]
    fn test_uniform_inverted_interval_kept() {
        let mut uniform = Uniform::new(5.0, 1.0).unwrap();
        assert_eq!(uniform.min(), 5.0);
        assert_eq!(uniform.max(), 1.0);

        let mut src = Scripted::new(&[0.0, 0.5, 0.999]);
        for _ in 0..3 {
            let x = uniform.sample(&mut src);
            assert!((1.0..=5.0).contains(&x));
        }
    }

    #[test]
    fn test_uniform_moments() {
        let (mean, var) = moments(Uniform::new(2.0, 6.0).unwrap(), 7, 200_000);
        assert_abs_diff_eq!(mean, 4.0, epsilon = 0.02);
        assert_abs_diff_eq!(var, 16.0 / 12.0, epsilon = 0.02);
    }

    #[test]
    fn test_uniform_rejects_non_finite() {
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        let mut uniform = Uniform::standard();
        assert!(uniform.set_max(f64::INFINITY).is_err());
        assert_eq!(uniform.max(), 1.0);
    }
}
