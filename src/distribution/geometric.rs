//! Geometric distribution: number of Bernoulli(p) trials up to and
//! including the first success. Support is {1, 2, 3, ...}.
//!
//! - **p < 0.3**: closed form `ceil(ln(1 - u) / ln(1 - p))`, with both
//!   logarithms taken through `ln_1p` so tiny p keeps its precision
//! - **p >= 0.3**: direct simulation, counting trials until `u <= p`

use super::{open_unit, Distribution};
use crate::error::{Result, SamplerError};
use crate::source::UniformSource;

/// Below this success probability the closed form beats simulation
const INVERSION_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct Geometric {
    p: f64,
    /// Cached `ln(1 - p)` for the closed-form branch
    ln_q: f64,
}

fn check_p(p: f64) -> Result<f64> {
    if p > 0.0 && p <= 1.0 {
        Ok(p)
    } else {
        Err(SamplerError::invalid("probability", p, "must be in (0, 1]"))
    }
}

impl Geometric {
    /// # Errors
    ///
    /// Fails unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self> {
        let p = check_p(p)?;
        Ok(Self {
            p,
            ln_q: (-p).ln_1p(),
        })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }

    pub fn set_probability(&mut self, p: f64) -> Result<()> {
        let p = check_p(p)?;
        self.p = p;
        self.ln_q = (-p).ln_1p();
        Ok(())
    }
}

impl Distribution for Geometric {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        if self.p < INVERSION_THRESHOLD {
            let u = open_unit(src);
            return ((-u).ln_1p() / self.ln_q).ceil().max(1.0);
        }

        let mut trials = 1.0;
        while src.next_f64() > self.p {
            trials += 1.0;
        }
        trials
    }

    fn name(&self) -> &'static str {
        "geometric"
    }

    fn mean(&self) -> Option<f64> {
        Some(1.0 / self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some((1.0 - self.p) / (self.p * self.p))
    }
}
