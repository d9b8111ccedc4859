//! Summary statistics over generated samples
//!
//! [`SampleStats`] is a streaming accumulator: count, mean and variance via
//! Welford's update, plus min/max. Per-worker partials combine with
//! [`SampleStats::merge`] (Chan et al. pairwise formula), so the result does
//! not depend on how the samples were split.
//!
//! # Example
//!
//! ```
//! use variates::stats::SampleStats;
//!
//! let mut stats = SampleStats::new();
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     stats.push(v);
//! }
//! assert_eq!(stats.count(), 4);
//! assert_eq!(stats.mean(), 2.5);
//! assert_eq!(stats.min(), Some(1.0));
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
    min: f64,
    max: f64,
}

impl SampleStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        let mut stats = Self::new();
        stats.extend(values.iter().copied());
        stats
    }

    /// Record one sample
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Combine another accumulator into this one
    pub fn merge(&mut self, other: &SampleStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let total = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / total;
        self.m2 += other.m2 + delta * delta * n_a * n_b / total;
        self.count += other.count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sample mean (0 when empty)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (0 with fewer than two samples)
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Unbiased sample variance
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn stdev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

impl Default for SampleStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for SampleStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for SampleStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
