//! Exponential distribution with rate λ
//!
//! Closed-form inversion. The uniform draw is first symmetrized to
//! `w = 2u - 1` in [-1, 1), matching the other generators in the family, and
//! mapped back with `(w + 1) / 2` before taking `-ln(.) / λ`. A draw that
//! maps to exactly zero is redrawn, so the result is always finite.

use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;

#[derive(Debug, Clone)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// # Errors
    ///
    /// Fails unless `lambda > 0`.
    pub fn new(lambda: f64) -> Result<Self> {
        Ok(Self {
            lambda: positive("lambda", lambda)?,
        })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn set_lambda(&mut self, lambda: f64) -> Result<()> {
        self.lambda = positive("lambda", lambda)?;
        Ok(())
    }
}

impl Distribution for Exponential {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        loop {
            let w = 2.0 * src.next_f64() - 1.0;
            let x = (w + 1.0) / 2.0;
            if x > 0.0 {
                return -x.ln() / self.lambda;
            }
        }
    }

    fn name(&self) -> &'static str {
        "exponential"
    }

    fn mean(&self) -> Option<f64> {
        Some(1.0 / self.lambda)
    }

    fn variance(&self) -> Option<f64> {
        Some(1.0 / (self.lambda * self.lambda))
    }
}
