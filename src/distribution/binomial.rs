//! Binomial distribution: successes in `n` Bernoulli(p) trials
//!
//! # Algorithm
//!
//! Works with `p' = min(p, 1 - p)` and reflects the result when `p > 0.5`.
//!
//! - **n < 25**: count successes directly
//! - **n p' < 1**: waiting-time method, multiplying uniforms until the
//!   product drops below `exp(-n p')`
//! - otherwise: rejection from a Lorentzian envelope centred on `n p'`
//!   with width `sqrt(2 n p' (1 - p'))`, accepted against the exact
//!   log-probability
//!
//! The log-gamma and log-probability terms of the rejection branch are
//! cached per instance and recomputed only when `n` or `p'` changes.

use super::Distribution;
use crate::error::{probability, Result};
use crate::source::UniformSource;
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;
use tracing::debug;

/// Below this many trials, counting is cheapest
const DIRECT_TRIALS: u64 = 25;

#[derive(Debug, Clone)]
pub struct Binomial {
    trials: u64,
    p: f64,
    cache: BinomialCache,
}

/// Terms derived from `(n, p')`
#[derive(Debug, Clone, Copy, PartialEq)]
struct BinomialCache {
    /// `min(p, 1 - p)`
    pp: f64,
    /// `n p'`
    am: f64,
    /// `exp(-n p')`
    exp_neg_am: f64,
    /// `lnΓ(n + 1)`
    ln_gamma_n1: f64,
    ln_pp: f64,
    ln_pc: f64,
    /// `sqrt(2 n p' (1 - p'))`
    width: f64,
}

impl BinomialCache {
    fn derive(trials: u64, p: f64) -> Self {
        let pp = p.min(1.0 - p);
        let n = trials as f64;
        let am = n * pp;
        let pc = 1.0 - pp;
        Self {
            pp,
            am,
            exp_neg_am: (-am).exp(),
            ln_gamma_n1: ln_gamma(n + 1.0),
            ln_pp: pp.ln(),
            ln_pc: pc.ln(),
            width: (2.0 * am * pc).sqrt(),
        }
    }
}

impl Binomial {
    /// # Errors
    ///
    /// Fails unless `0 <= p <= 1`.
    pub fn new(trials: u64, p: f64) -> Result<Self> {
        let p = probability("probability", p)?;
        Ok(Self {
            trials,
            p,
            cache: BinomialCache::derive(trials, p),
        })
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn probability(&self) -> f64 {
        self.p
    }

    pub fn set_trials(&mut self, trials: u64) {
        if trials != self.trials {
            self.trials = trials;
            self.refresh();
        }
    }

    pub fn set_probability(&mut self, p: f64) -> Result<()> {
        let p = probability("probability", p)?;
        if p != self.p {
            self.p = p;
            self.refresh();
        }
        Ok(())
    }

    fn refresh(&mut self) {
        self.cache = BinomialCache::derive(self.trials, self.p);
        debug!(trials = self.trials, p = self.p, "binomial cache rebuilt");
    }

    fn count_successes(&self, src: &mut dyn UniformSource) -> f64 {
        let pp = self.cache.pp;
        (0..self.trials).filter(|_| src.next_f64() < pp).count() as f64
    }

    fn waiting_time(&self, src: &mut dyn UniformSource) -> f64 {
        let mut product = 1.0;
        for j in 0..=self.trials {
            product *= src.next_f64();
            if product < self.cache.exp_neg_am {
                return j as f64;
            }
        }
        self.trials as f64
    }

    fn rejection(&self, src: &mut dyn UniformSource) -> f64 {
        let c = &self.cache;
        let en = self.trials as f64;
        loop {
            let (k, y) = loop {
                let y = (PI * src.next_f64()).tan();
                let k = c.width * y + c.am;
                if k >= 0.0 && k < en + 1.0 {
                    break (k.floor(), y);
                }
            };
            let log_ratio = c.ln_gamma_n1 - ln_gamma(k + 1.0) - ln_gamma(en - k + 1.0)
                + k * c.ln_pp
                + (en - k) * c.ln_pc;
            let t = 1.2 * c.width * (1.0 + y * y) * log_ratio.exp();
            if src.next_f64() <= t {
                return k;
            }
        }
    }
}

impl Distribution for Binomial {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let successes = if self.trials < DIRECT_TRIALS {
            self.count_successes(src)
        } else if self.cache.am < 1.0 {
            self.waiting_time(src)
        } else {
            self.rejection(src)
        };

        if self.cache.pp != self.p {
            self.trials as f64 - successes
        } else {
            successes
        }
    }

    fn name(&self) -> &'static str {
        "binomial"
    }

    fn mean(&self) -> Option<f64> {
        Some(self.trials as f64 * self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.trials as f64 * self.p * (1.0 - self.p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_util::{moments, Scripted};
    use crate::distribution::{Generator, Sampler};
    use approx::assert_abs_diff_eq;

    fn assert_in_range(trials: u64, p: f64) {
        let mut gen = Generator::with_seed(Binomial::new(trials, p).unwrap(), 31);
        for _ in 0..5_000 {
            let x = gen.next();
            assert!(x >= 0.0 && x <= trials as f64, "n={} p={} gave {}", trials, p, x);
            assert_eq!(x.fract(), 0.0);
        }
    }

    #[test]
    fn test_binomial_ten_half() {
        assert_in_range(10, 0.5);
        let (mean, _) = moments(Binomial::new(10, 0.5).unwrap(), 32, 200_000);
        assert_abs_diff_eq!(mean, 5.0, epsilon = 0.02);
    }

    #[test]
    fn test_binomial_all_branches_in_range() {
        assert_in_range(0, 0.3);
        assert_in_range(24, 0.9);
        assert_in_range(1000, 0.0005);
        assert_in_range(100, 0.3);
        assert_in_range(100, 0.8);
        assert_in_range(50, 0.0);
        assert_in_range(50, 1.0);
    }

    #[test]
    fn test_binomial_rejection_moments() {
        let (mean, var) = moments(Binomial::new(100, 0.3).unwrap(), 33, 300_000);
        assert_abs_diff_eq!(mean, 30.0, epsilon = 0.05);
        assert_abs_diff_eq!(var, 21.0, epsilon = 0.4);
    }

    #[test]
    fn test_binomial_reflected_moments() {
        let (mean, var) = moments(Binomial::new(100, 0.8).unwrap(), 34, 300_000);
        assert_abs_diff_eq!(mean, 80.0, epsilon = 0.05);
        assert_abs_diff_eq!(var, 16.0, epsilon = 0.3);
    }

    #[test]
    fn test_binomial_waiting_time_moments() {
        let (mean, _) = moments(Binomial::new(1000, 0.0005).unwrap(), 35, 300_000);
        assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
    }

    #[test]
    fn test_binomial_direct_count() {
        let mut binomial = Binomial::new(4, 0.5).unwrap();
        let mut src = Scripted::new(&[0.1, 0.7, 0.3, 0.9]);
        assert_eq!(binomial.sample(&mut src), 2.0);
    }

    #[test]
    fn test_binomial_cache_is_per_instance() {
        let mut a = Binomial::new(100, 0.3).unwrap();
        let b = Binomial::new(400, 0.1).unwrap();
        let a_cache = a.cache;
        let mut gen = Generator::with_seed(b, 36);
        gen.next();
        assert_eq!(a.cache, a_cache);

        a.set_trials(200);
        assert_abs_diff_eq!(a.cache.am, 60.0);
        assert_abs_diff_eq!(a.cache.ln_gamma_n1, ln_gamma(201.0));
        a.set_probability(0.7).unwrap();
        assert_abs_diff_eq!(a.cache.pp, 0.3, epsilon = 1e-12);
        assert!(a.set_probability(1.2).is_err());
        assert_eq!(a.probability(), 0.7);
    }
}
