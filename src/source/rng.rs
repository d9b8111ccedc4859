//! Engine-backed uniform sources
//!
//! Uses the xoshiro256++ PRNG by default, which is fast and has good
//! statistical properties. Any `rand` engine can be plugged in through
//! [`RngSource`].

use super::{Seedable, UniformSource};
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::cell::RefCell;

/// A `rand` engine owned by a single sampler
pub struct RngSource<R> {
    rng: R,
}

/// The default per-sampler engine
pub type XoshiroSource = RngSource<Xoshiro256PlusPlus>;

impl<R: RngCore + SeedableRng + Send> RngSource<R> {
    /// Wrap an existing engine
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Engine seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: R::from_entropy(),
        }
    }

    /// Engine with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore + SeedableRng + Send> UniformSource for RngSource<R> {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn as_seedable(&mut self) -> Option<&mut dyn Seedable> {
        Some(self)
    }
}

impl<R: RngCore + SeedableRng> Seedable for RngSource<R> {
    fn reset(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => R::seed_from_u64(seed),
            None => R::from_entropy(),
        };
    }
}

thread_local! {
    static THREAD_ENGINE: RefCell<Xoshiro256PlusPlus> =
        RefCell::new(Xoshiro256PlusPlus::from_entropy());
}

/// Handle onto the calling thread's engine
///
/// This is the default source for samplers built with `Generator::new`.
/// Each thread has its own engine, so samplers on different threads never
/// contend; samplers on the same thread interleave draws from one stream.
/// Reseeding through this handle reseeds the whole thread's engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl UniformSource for ThreadSource {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        THREAD_ENGINE.with(|engine| engine.borrow_mut().gen::<f64>())
    }

    fn as_seedable(&mut self) -> Option<&mut dyn Seedable> {
        Some(self)
    }
}

impl Seedable for ThreadSource {
    fn reset(&mut self, seed: Option<u64>) {
        THREAD_ENGINE.with(|engine| {
            *engine.borrow_mut() = match seed {
                Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
                None => Xoshiro256PlusPlus::from_entropy(),
            };
        });
    }
}
