//! Triangular distribution on `[lower, upper]` with peak at `mode`
//!
//! # Parameters
//!
//! - **lower**, **upper**: bounds; an inverted pair is swapped on assignment
//! - **mode**: peak, strictly between the bounds
//!
//! The mode is cached in normalized form `(mode - lower) / (upper - lower)`
//! and re-derived whenever any parameter changes.
//!
//! # Algorithm
//!
//! Inversion on the unit triangle: if `u <= m`, `sqrt(m u)`; otherwise
//! `1 - sqrt((1 - m)(1 - u))`; then scaled onto `[lower, upper]`.

use super::Distribution;
use crate::error::{finite, Result, SamplerError};
use crate::source::UniformSource;

#[derive(Debug, Clone)]
pub struct Triangular {
    lower: f64,
    upper: f64,
    mode: f64,
    /// Position of the mode within the range, in (0, 1)
    mode_std: f64,
}

impl Triangular {
    /// # Errors
    ///
    /// Fails unless, after ordering the bounds, `lower < mode < upper`.
    pub fn new(lower: f64, upper: f64, mode: f64) -> Result<Self> {
        let (lower, upper, mode_std) = Self::derive(lower, upper, mode)?;
        Ok(Self {
            lower,
            upper,
            mode,
            mode_std,
        })
    }

    /// Validate and order a candidate triple, returning the cached mode
    fn derive(lower: f64, upper: f64, mode: f64) -> Result<(f64, f64, f64)> {
        finite("lower", lower)?;
        finite("upper", upper)?;
        finite("mode", mode)?;

        let (lower, upper) = if lower > upper {
            (upper, lower)
        } else {
            (lower, upper)
        };
        if !(lower < mode && mode < upper) {
            return Err(SamplerError::InvalidOrder { lower, mode, upper });
        }
        Ok((lower, upper, (mode - lower) / (upper - lower)))
    }

    fn assign(&mut self, lower: f64, upper: f64, mode: f64) -> Result<()> {
        let (lower, upper, mode_std) = Self::derive(lower, upper, mode)?;
        self.lower = lower;
        self.upper = upper;
        self.mode = mode;
        self.mode_std = mode_std;
        Ok(())
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Cached normalized mode position
    pub fn mode_position(&self) -> f64 {
        self.mode_std
    }

    pub fn set_lower(&mut self, lower: f64) -> Result<()> {
        self.assign(lower, self.upper, self.mode)
    }

    pub fn set_upper(&mut self, upper: f64) -> Result<()> {
        self.assign(self.lower, upper, self.mode)
    }

    pub fn set_mode(&mut self, mode: f64) -> Result<()> {
        self.assign(self.lower, self.upper, mode)
    }
}

impl Distribution for Triangular {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let u = src.next_f64();
        let m = self.mode_std;
        let unit = if u <= m {
            (m * u).sqrt()
        } else {
            1.0 - ((1.0 - m) * (1.0 - u)).sqrt()
        };
        self.lower + (self.upper - self.lower) * unit
    }

    fn name(&self) -> &'static str {
        "triangular"
    }

    fn mean(&self) -> Option<f64> {
        Some((self.lower + self.upper + self.mode) / 3.0)
    }

    fn variance(&self) -> Option<f64> {
        let (a, b, c) = (self.lower, self.upper, self.mode);
        Some((a * a + b * b + c * c - a * b - a * c - b * c) / 18.0)
    }
}
