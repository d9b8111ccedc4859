//! Weibull distribution with shape α and unit scale
//!
//! Inversion: `(-ln(1 - u))^(1/α)`.

use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;
use statrs::function::gamma::gamma;

#[derive(Debug, Clone)]
pub struct Weibull {
    alpha: f64,
}

impl Weibull {
    /// # Errors
    ///
    /// Fails unless `alpha > 0`.
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            alpha: positive("alpha", alpha)?,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.alpha = positive("alpha", alpha)?;
        Ok(())
    }
}

impl Distribution for Weibull {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let u = src.next_f64();
        (-(1.0 - u).ln()).powf(1.0 / self.alpha)
    }

    fn name(&self) -> &'static str {
        "weibull"
    }

    fn mean(&self) -> Option<f64> {
        Some(gamma(1.0 + 1.0 / self.alpha))
    }

    fn variance(&self) -> Option<f64> {
        let g1 = gamma(1.0 + 1.0 / self.alpha);
        let g2 = gamma(1.0 + 2.0 / self.alpha);
        Some(g2 - g1 * g1)
    }
}
