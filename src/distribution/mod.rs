//! Random variate generators
//!
//! This module provides one generator per classical probability distribution.
//! Each turns a stream of uniform [0, 1) values into values following the
//! distribution's density, using closed-form inversion, rejection sampling,
//! ratio-of-uniforms or composition of simpler generators.
//!
//! # Distributions
//!
//! - **Primitive**: Uniform, Exponential, Cauchy, Logistic, Pareto, Power,
//!   Weibull, Triangular, Normal
//! - **Composite**: Gamma, ChiSquare (via Gamma), Beta, StudentT (via
//!   ChiSquare and Normal), FisherF (via two ChiSquare), LogNormal (via Normal)
//! - **Discrete**: Poisson, Binomial, Geometric (values are whole numbers
//!   returned as `f64`)
//!
//! # Design
//!
//! A [`Distribution`] holds parameters and derived caches only. It samples
//! from whatever [`UniformSource`] it is handed, which lets composites own
//! their sub-distributions by value and drive them from the owner's source.
//! A [`Generator`] pairs one distribution with one source and implements the
//! object-safe [`Sampler`] contract.
//!
//! # Rejection loops
//!
//! Gamma, Beta, StudentT, Poisson and Binomial use unbounded accept/reject
//! loops. Their expected iteration count grows for extreme parameters; there
//! is no cap, because a cap would bias the output. Wrap the source in a
//! [`crate::source::CountingSource`] to observe the cost.
//!
//! # Example
//!
//! ```
//! use variates::distribution::{Generator, Sampler, normal::Normal};
//!
//! let mut gen = Generator::with_seed(Normal::new(10.0, 2.0).unwrap(), 42);
//! let x = gen.next();
//! assert!(x.is_finite());
//!
//! // Parameters are reachable through the generator
//! gen.set_mean(0.0).unwrap();
//! let mut buf = [0.0; 16];
//! gen.fill(&mut buf);
//! ```

use crate::source::{ThreadSource, UniformSource, XoshiroSource};
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// A probability distribution's sampling algorithm
///
/// Implementations hold parameters and derived caches. Setters validate at
/// assignment time and refresh whatever cache the parameter feeds.
///
/// # Thread Safety
///
/// Distributions must be `Send` so a sampler can be moved to a worker. Several
/// mutate internal state on every call (spare Gaussian, cached terms), so an
/// instance must not be shared between threads.
pub trait Distribution: Send {
    /// Draw one variate, consuming one or more uniform values from `src`
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64;

    /// Short lowercase name, used in logs and output
    fn name(&self) -> &'static str;

    /// Remap a canonical sample onto the given location and spread
    fn normalize(&self, value: f64, mean: f64, stdev: f64) -> f64 {
        value * stdev + mean
    }

    /// Drop state derived from previous draws (spare values)
    ///
    /// Called after the source is reseeded so the sequence replays exactly.
    fn reset_state(&mut self) {}

    /// Mean of the distribution, if defined
    fn mean(&self) -> Option<f64> {
        None
    }

    /// Variance of the distribution, if defined
    fn variance(&self) -> Option<f64> {
        None
    }

    /// Standard deviation, if the variance is defined
    fn stdev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }
}

/// Object-safe sampling contract
pub trait Sampler: Send {
    /// Draw the next variate
    fn next(&mut self) -> f64;

    /// Fill `buffer` with consecutive draws
    fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next();
        }
    }

    /// Fill `buffer`, then remap every value onto `mean` and `stdev`
    fn fill_normalized(&mut self, buffer: &mut [f64], mean: f64, stdev: f64);

    /// Reseed the underlying source
    ///
    /// Returns `false` (and changes nothing) when the source cannot be
    /// reseeded. `None` reseeds from OS entropy.
    fn reset(&mut self, seed: Option<u64>) -> bool;

    /// Name of the configured distribution
    fn name(&self) -> &'static str;

    /// Mean of the configured distribution, if defined
    fn mean(&self) -> Option<f64>;

    /// Variance of the configured distribution, if defined
    fn variance(&self) -> Option<f64>;
}

/// A distribution paired with the source that drives it
///
/// Dereferences to the distribution, so parameter getters and setters are
/// called directly on the generator.
pub struct Generator<D> {
    dist: D,
    source: Box<dyn UniformSource>,
}

impl<D: Distribution> Generator<D> {
    /// Generator drawing from the calling thread's default engine
    pub fn new(dist: D) -> Self {
        Self::with_source(dist, ThreadSource)
    }

    /// Generator with its own engine and a specific seed
    ///
    /// Useful for reproducible runs.
    pub fn with_seed(dist: D, seed: u64) -> Self {
        Self::with_source(dist, XoshiroSource::seeded(seed))
    }

    /// Generator with a custom source
    pub fn with_source<S: UniformSource + 'static>(dist: D, source: S) -> Self {
        debug!(distribution = dist.name(), "creating generator");
        Self {
            dist,
            source: Box::new(source),
        }
    }

    /// Replace the source, keeping parameters
    pub fn set_source<S: UniformSource + 'static>(&mut self, source: S) {
        self.source = Box::new(source);
        self.dist.reset_state();
    }

    pub fn distribution(&self) -> &D {
        &self.dist
    }

    pub fn distribution_mut(&mut self) -> &mut D {
        &mut self.dist
    }

    pub fn into_inner(self) -> D {
        self.dist
    }
}

impl<D> Deref for Generator<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.dist
    }
}

impl<D> DerefMut for Generator<D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.dist
    }
}

impl<D: Distribution> Sampler for Generator<D> {
    #[inline]
    fn next(&mut self) -> f64 {
        self.dist.sample(&mut *self.source)
    }

    fn fill_normalized(&mut self, buffer: &mut [f64], mean: f64, stdev: f64) {
        self.fill(buffer);
        for value in buffer.iter_mut() {
            *value = self.dist.normalize(*value, mean, stdev);
        }
    }

    fn reset(&mut self, seed: Option<u64>) -> bool {
        match self.source.as_seedable() {
            Some(seedable) => {
                seedable.reset(seed);
                self.dist.reset_state();
                debug!(distribution = self.dist.name(), ?seed, "source reseeded");
                true
            }
            None => {
                debug!(distribution = self.dist.name(), "source is not seedable");
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        self.dist.name()
    }

    fn mean(&self) -> Option<f64> {
        self.dist.mean()
    }

    fn variance(&self) -> Option<f64> {
        self.dist.variance()
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    #[inline]
    fn next(&mut self) -> f64 {
        (**self).next()
    }

    fn fill(&mut self, buffer: &mut [f64]) {
        (**self).fill(buffer)
    }

    fn fill_normalized(&mut self, buffer: &mut [f64], mean: f64, stdev: f64) {
        (**self).fill_normalized(buffer, mean, stdev)
    }

    fn reset(&mut self, seed: Option<u64>) -> bool {
        (**self).reset(seed)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn mean(&self) -> Option<f64> {
        (**self).mean()
    }

    fn variance(&self) -> Option<f64> {
        (**self).variance()
    }
}

/// Uniform draw in (0, 1), redrawing the (rare) exact zero
///
/// Used where the algorithm takes a logarithm or reciprocal of the draw.
#[inline]
pub(crate) fn open_unit(src: &mut dyn UniformSource) -> f64 {
    loop {
        let u = src.next_f64();
        if u > 0.0 {
            return u;
        }
    }
}

/// Pair of uniforms in the unit disc, first coordinate nonzero
///
/// Shared by the polar Gaussian and the Cauchy-envelope Gamma branch.
#[inline]
pub(crate) fn polar_pair(src: &mut dyn UniformSource) -> (f64, f64, f64) {
    loop {
        let x = 2.0 * src.next_f64() - 1.0;
        let y = 2.0 * src.next_f64() - 1.0;
        let sum = x * x + y * y;
        if sum <= 1.0 && sum != 0.0 && x != 0.0 {
            return (x, y, sum);
        }
    }
}

pub mod beta;
pub mod binomial;
pub mod cauchy;
pub mod chi_square;
pub mod exponential;
pub mod fisher_f;
pub mod gamma;
pub mod geometric;
pub mod logistic;
pub mod lognormal;
pub mod normal;
pub mod pareto;
pub mod poisson;
pub mod power;
pub mod student_t;
pub mod triangular;
pub mod uniform;
pub mod weibull;


#[cfg(test)]
mod tests {
    use super::normal::Normal;
    use super::uniform::Uniform;
    use super::*;
    use crate::source::FnSource;

    #[test]
    fn test_generator_reset_seeded() {
        let mut gen = Generator::with_seed(Normal::standard(), 1);
        gen.reset(Some(99));
        let first: Vec<f64> = (0..11).map(|_| gen.next()).collect();
        assert!(gen.reset(Some(99)));
        let second: Vec<f64> = (0..11).map(|_| gen.next()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generator_reset_not_seedable() {
        let mut gen = Generator::with_source(Uniform::standard(), FnSource::new(|| 0.5));
        assert!(!gen.reset(None));
        assert!(!gen.reset(Some(1)));
        // Still usable with its existing source
        assert_eq!(gen.next(), 0.5);
    }

    #[test]
    fn test_fill() {
        let mut gen = Generator::with_seed(Uniform::standard(), 3);
        let mut buf = vec![-1.0; 64];
        gen.fill(&mut buf);
        assert!(buf.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_fill_normalized_default() {
        let mut gen = Generator::with_source(Uniform::standard(), FnSource::new(|| 0.5));
        let mut buf = [0.0; 4];
        gen.fill_normalized(&mut buf, 10.0, 2.0);
        assert!(buf.iter().all(|&v| v == 11.0));
    }

    #[test]
    fn test_deref_setters() {
        let mut gen = Generator::with_seed(Normal::standard(), 5);
        gen.set_stdev(3.0).unwrap();
        assert_eq!(gen.sigma(), 3.0);
        assert_eq!(Sampler::variance(&gen), Some(9.0));
    }

    #[test]
    fn test_boxed_sampler() {
        let mut boxed: Box<dyn Sampler> = Box::new(Generator::with_seed(Uniform::standard(), 8));
        assert_eq!(boxed.name(), "uniform");
        let x = boxed.next();
        assert!((0.0..=1.0).contains(&x));
        assert!(boxed.reset(Some(8)));
    }

    #[test]
    fn test_open_unit_skips_zero() {
        let mut src = test_util::Scripted::new(&[0.0, 0.0, 0.3]);
        assert_eq!(open_unit(&mut src), 0.3);
    }

    #[test]
    fn test_polar_pair_in_disc() {
        let mut src = XoshiroSource::seeded(11);
        for _ in 0..1000 {
            let (x, y, sum) = polar_pair(&mut src);
            assert!(sum > 0.0 && sum <= 1.0);
            assert!((x * x + y * y - sum).abs() < 1e-15);
            assert!(x != 0.0);
        }
    }
}
