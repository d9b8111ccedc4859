//! Uniform sources
//!
//! Every distribution turns a stream of uniform [0, 1) values into variates.
//! This module defines where that stream comes from.
//!
//! # Sources
//!
//! - **ThreadSource**: per-thread xoshiro256++ engine (the default)
//! - **RngSource / XoshiroSource**: an engine owned by one sampler, seedable
//! - **FnSource**: any closure returning [0, 1); not seedable
//! - **CountingSource**: wrapper counting draws, for observing rejection loops
//!
//! # Seeding
//!
//! Reseeding is an explicit capability. A source that can be reseeded returns
//! itself from [`UniformSource::as_seedable`]; everything else returns `None`
//! and [`crate::Sampler::reset`] reports `false`.
//!
//! # Example
//!
//! ```
//! use variates::source::{UniformSource, XoshiroSource};
//!
//! let mut src = XoshiroSource::seeded(7);
//! let u = src.next_f64();
//! assert!((0.0..1.0).contains(&u));
//! assert!(src.as_seedable().is_some());
//! ```

pub mod rng;

pub use rng::{RngSource, ThreadSource, XoshiroSource};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A stream of uniformly distributed values in [0, 1)
///
/// Sources must be `Send` so a sampler can be moved to a worker thread. A
/// single source is never shared between threads; give each worker its own.
pub trait UniformSource: Send {
    /// Next uniform value in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Reseeding capability, if this source has one
    fn as_seedable(&mut self) -> Option<&mut dyn Seedable> {
        None
    }
}

/// Capability of a source to be deterministically reseeded
pub trait Seedable {
    /// Reseed from `seed`, or from OS entropy when `None`
    fn reset(&mut self, seed: Option<u64>);
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn as_seedable(&mut self) -> Option<&mut dyn Seedable> {
        (**self).as_seedable()
    }
}

/// Closure-backed source
///
/// The closure must return values in [0, 1). It cannot be reseeded.
pub struct FnSource<F> {
    f: F,
}

impl<F> FnSource<F>
where
    F: FnMut() -> f64 + Send,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> UniformSource for FnSource<F>
where
    F: FnMut() -> f64 + Send,
{
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.f)()
    }
}

/// Shared handle onto the draw count of a [`CountingSource`]
#[derive(Debug, Clone, Default)]
pub struct DrawCounter(Arc<AtomicU64>);

impl DrawCounter {
    /// Uniform draws consumed so far
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Wrapper that counts uniform draws
///
/// Rejection loops have no iteration cap. Counting the uniform draws a
/// sampler consumes makes their cost observable without touching the
/// sampled values. Seedability of the inner source is forwarded.
pub struct CountingSource<S> {
    inner: S,
    counter: DrawCounter,
}

impl<S: UniformSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            counter: DrawCounter::default(),
        }
    }

    /// Handle that stays valid after the source is moved into a sampler
    pub fn counter(&self) -> DrawCounter {
        self.counter.clone()
    }
}

impl<S: UniformSource> UniformSource for CountingSource<S> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.counter.0.fetch_add(1, Ordering::Relaxed);
        self.inner.next_f64()
    }

    fn as_seedable(&mut self) -> Option<&mut dyn Seedable> {
        self.inner.as_seedable()
    }
}
