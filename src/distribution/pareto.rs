//! Pareto distribution with shape `c` and unit scale
//!
//! Inversion: `u^(-1/c)` with `u` in (0, 1], so the support is `[1, ∞)`.
//! Small `c` gives heavy tails: the mean only exists for `c > 1` and the
//! variance for `c > 2`.

use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;

#[derive(Debug, Clone)]
pub struct Pareto {
    shape: f64,
}

impl Pareto {
    /// # Errors
    ///
    /// Fails unless `shape > 0`.
    pub fn new(shape: f64) -> Result<Self> {
        Ok(Self {
            shape: positive("shape", shape)?,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn set_shape(&mut self, shape: f64) -> Result<()> {
        self.shape = positive("shape", shape)?;
        Ok(())
    }
}

impl Distribution for Pareto {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let u = 1.0 - src.next_f64();
        u.powf(-1.0 / self.shape)
    }

    fn name(&self) -> &'static str {
        "pareto"
    }

    fn mean(&self) -> Option<f64> {
        (self.shape > 1.0).then(|| self.shape / (self.shape - 1.0))
    }

    fn variance(&self) -> Option<f64> {
        let c = self.shape;
        (c > 2.0).then(|| c / ((c - 1.0) * (c - 1.0) * (c - 2.0)))
    }
}
