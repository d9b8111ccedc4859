//! Standard Cauchy distribution
//!
//! Ratio-of-uniforms: draw `x = 1 - u1` in (0, 1] and `y = 2u2 - 1` in
//! [-1, 1), reject points outside the unit half-disc, return `y / x`.
//! Mean and variance are undefined.

use super::Distribution;
use crate::source::UniformSource;

#[derive(Debug, Clone, Default)]
pub struct Cauchy;

impl Cauchy {
    pub fn new() -> Self {
        Self
    }
}

impl Distribution for Cauchy {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        loop {
            let x = 1.0 - src.next_f64();
            let y = 2.0 * src.next_f64() - 1.0;
            if x * x + y * y <= 1.0 {
                return y / x;
            }
        }
    }

    fn name(&self) -> &'static str {
        "cauchy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::Scripted;
    use crate::distribution::{Generator, Sampler};

    #[test]
    fn test_cauchy_ratio() {
        let mut cauchy = Cauchy::new();
        // x = 0.5, y = 0.25
        let mut src = Scripted::new(&[0.5, 0.625]);
        assert_eq!(cauchy.sample(&mut src), 0.5);
    }

    #[test]
    fn test_cauchy_rejects_outside_disc() {
        let mut cauchy = Cauchy::new();
        // (x=1, y≈1) rejected, then (x=0.5, y=0)
        let mut src = Scripted::new(&[0.0, 0.999_999, 0.5, 0.5]);
        assert_eq!(cauchy.sample(&mut src), 0.0);
    }

    #[test]
    fn test_cauchy_median_and_quartiles() {
        let mut gen = Generator::with_seed(Cauchy::new(), 17);
        let n = 100_000;
        let mut xs: Vec<f64> = (0..n).map(|_| gen.next()).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());

        // Quartiles of the standard Cauchy are -1, 0, 1
        assert!((xs[n / 2]).abs() < 0.03);
        assert!((xs[n / 4] + 1.0).abs() < 0.05);
        assert!((xs[3 * n / 4] - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_cauchy_no_moments() {
        assert!(Cauchy::new().mean().is_none());
        assert!(Cauchy::new().variance().is_none());
    }
}
