//! Power-function distribution on [0, 1]
//!
//! Density `(n + 1) x^n`; inversion `u^(1 / (n + 1))`.

use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;

#[derive(Debug, Clone)]
pub struct Power {
    exponent: f64,
}

impl Power {
    /// # Errors
    ///
    /// Fails unless `exponent > 0`.
    pub fn new(exponent: f64) -> Result<Self> {
        Ok(Self {
            exponent: positive("exponent", exponent)?,
        })
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f64) -> Result<()> {
        self.exponent = positive("exponent", exponent)?;
        Ok(())
    }
}

impl Distribution for Power {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        src.next_f64().powf(1.0 / (self.exponent + 1.0))
    }

    fn name(&self) -> &'static str {
        "power"
    }

    fn mean(&self) -> Option<f64> {
        let k = self.exponent + 1.0;
        Some(k / (k + 1.0))
    }

    fn variance(&self) -> Option<f64> {
        let k = self.exponent + 1.0;
        Some(k / ((k + 1.0) * (k + 1.0) * (k + 2.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::{moments, Scripted};
    use crate::distribution::{Generator, Sampler};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_power_support() {
        let mut gen = Generator::with_seed(Power::new(3.0).unwrap(), 6);
        for _ in 0..10_000 {
            let x = gen.next();
            assert!((0.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn test_power_inversion() {
        let mut power = Power::new(1.0).unwrap();
        let mut src = Scripted::new(&[0.25]);
        assert_abs_diff_eq!(power.sample(&mut src), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_power_moments() {
        let power = Power::new(2.0).unwrap();
        let expected_mean = power.mean().unwrap();
        let expected_var = power.variance().unwrap();
        let (mean, var) = moments(power, 30, 200_000);
        assert_abs_diff_eq!(mean, expected_mean, epsilon = 0.005);
        assert_abs_diff_eq!(var, expected_var, epsilon = 0.002);
    }

    #[test]
    fn test_power_invalid_exponent() {
        assert!(Power::new(0.0).is_err());
        let mut power = Power::new(1.0).unwrap();
        assert!(power.set_exponent(-3.0).is_err());
        assert_eq!(power.exponent(), 1.0);
    }
}
