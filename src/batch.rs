//! Batch generation helpers
//!
//! Works with any [`Sampler`]: collect into a vector, or walk a lazy
//! sequence of N samples.
//!
//! # Example
//!
//! ```
//! use variates::batch::{sample_vec, SampleSequence};
//! use variates::distribution::{Generator, exponential::Exponential};
//!
//! let mut gen = Generator::with_seed(Exponential::new(2.0).unwrap(), 3);
//! let values = sample_vec(&mut gen, 100);
//! assert_eq!(values.len(), 100);
//!
//! let mut seq = SampleSequence::new(&mut gen, 10);
//! let total: f64 = seq.iter().sum();
//! assert!(total > 0.0);
//! // A second pass draws ten fresh samples
//! assert_eq!(seq.iter().count(), 10);
//! ```

use crate::distribution::Sampler;

/// Draw `n` samples into a new vector
pub fn sample_vec<S: Sampler + ?Sized>(sampler: &mut S, n: usize) -> Vec<f64> {
    let mut values = vec![0.0; n];
    sampler.fill(&mut values);
    values
}

/// Draw `n` samples remapped onto `mean` and `stdev`
pub fn sample_vec_normalized<S: Sampler + ?Sized>(
    sampler: &mut S,
    n: usize,
    mean: f64,
    stdev: f64,
) -> Vec<f64> {
    let mut values = vec![0.0; n];
    sampler.fill_normalized(&mut values, mean, stdev);
    values
}

/// Lazy, restartable sequence of `len` samples
///
/// Each call to [`SampleSequence::iter`] starts a new pass of `len` fresh
/// draws. A pass cannot be rewound: values already yielded are gone.
pub struct SampleSequence<'a, S: ?Sized> {
    sampler: &'a mut S,
    len: usize,
}

impl<'a, S: Sampler + ?Sized> SampleSequence<'a, S> {
    pub fn new(sampler: &'a mut S, len: usize) -> Self {
        Self { sampler, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start a new pass
    pub fn iter(&mut self) -> Samples<'_, S> {
        Samples {
            sampler: &mut *self.sampler,
            remaining: self.len,
        }
    }
}

/// One pass over a [`SampleSequence`]
pub struct Samples<'a, S: ?Sized> {
    sampler: &'a mut S,
    remaining: usize,
}

impl<'a, S: Sampler + ?Sized> Samples<'a, S> {
    /// Iterator over `n` draws from `sampler`
    pub fn new(sampler: &'a mut S, n: usize) -> Self {
        Self {
            sampler,
            remaining: n,
        }
    }
}

impl<S: Sampler + ?Sized> Iterator for Samples<'_, S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Sampler + ?Sized> ExactSizeIterator for Samples<'_, S> {}
