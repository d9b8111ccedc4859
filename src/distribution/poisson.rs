//! Poisson distribution with mean λ
//!
//! # Algorithm
//!
//! - **λ < 12**: multiply uniform draws until the running product drops to
//!   `exp(-λ)` or below; the number of extra draws is the variate.
//! - **λ >= 12**: rejection from a Lorentzian (Cauchy-shaped) envelope
//!   `λ + sqrt(2λ) tan(πu)`, floored, accepted with probability
//!   `0.9 (1 + y²) exp(k ln λ - lnΓ(k + 1) - g)`.
//!
//! `exp(-λ)`, `sqrt(2λ)`, `ln λ` and `g = λ ln λ - lnΓ(λ + 1)` are cached
//! and recomputed only when λ changes.

use super::Distribution;
use crate::error::{non_negative, Result};
use crate::source::UniformSource;
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;

/// λ at which the rejection method takes over from direct simulation
const REJECTION_THRESHOLD: f64 = 12.0;

#[derive(Debug, Clone)]
pub struct Poisson {
    lambda: f64,
    cache: PoissonCache,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PoissonCache {
    exp_neg_lambda: f64,
    sqrt_2_lambda: f64,
    ln_lambda: f64,
    g: f64,
}

impl PoissonCache {
    fn derive(lambda: f64) -> Self {
        if lambda < REJECTION_THRESHOLD {
            return Self {
                exp_neg_lambda: (-lambda).exp(),
                sqrt_2_lambda: 0.0,
                ln_lambda: 0.0,
                g: 0.0,
            };
        }
        let ln_lambda = lambda.ln();
        Self {
            exp_neg_lambda: (-lambda).exp(),
            sqrt_2_lambda: (2.0 * lambda).sqrt(),
            ln_lambda,
            g: lambda * ln_lambda - ln_gamma(lambda + 1.0),
        }
    }
}

impl Poisson {
    /// # Errors
    ///
    /// Fails unless `lambda >= 0`.
    pub fn new(lambda: f64) -> Result<Self> {
        let lambda = non_negative("lambda", lambda)?;
        Ok(Self {
            lambda,
            cache: PoissonCache::derive(lambda),
        })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn set_lambda(&mut self, lambda: f64) -> Result<()> {
        let lambda = non_negative("lambda", lambda)?;
        if lambda != self.lambda {
            self.cache = PoissonCache::derive(lambda);
            self.lambda = lambda;
        }
        Ok(())
    }

    fn sample_direct(&self, src: &mut dyn UniformSource) -> f64 {
        let mut count = -1.0;
        let mut product = 1.0;
        loop {
            count += 1.0;
            product *= src.next_f64();
            if product <= self.cache.exp_neg_lambda {
                return count;
            }
        }
    }

    fn sample_rejection(&self, src: &mut dyn UniformSource) -> f64 {
        let c = &self.cache;
        loop {
            let (k, y) = loop {
                let y = (PI * src.next_f64()).tan();
                let k = c.sqrt_2_lambda * y + self.lambda;
                if k >= 0.0 {
                    break (k.floor(), y);
                }
            };
            let t = 0.9 * (1.0 + y * y) * (k * c.ln_lambda - ln_gamma(k + 1.0) - c.g).exp();
            if src.next_f64() <= t {
                return k;
            }
        }
    }
}

impl Distribution for Poisson {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        if self.lambda < REJECTION_THRESHOLD {
            self.sample_direct(src)
        } else {
            self.sample_rejection(src)
        }
    }

    fn name(&self) -> &'static str {
        "poisson"
    }

    fn mean(&self) -> Option<f64> {
        Some(self.lambda)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.lambda)
    }
}
