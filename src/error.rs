//! Error types for parameter validation
//!
//! Every distribution validates its parameters at construction and in each
//! setter. Sampling itself never fails, so `next()` has no error path.

use thiserror::Error;

/// Errors raised when a distribution parameter is out of its domain.
///
/// # Examples
///
/// ```
/// use variates::error::SamplerError;
///
/// let err = SamplerError::invalid("rate", -1.0, "must be positive");
/// assert_eq!(err.to_string(), "invalid parameter `rate` = -1: must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// A single parameter violates its domain
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Triangular bounds and mode are not strictly ordered
    #[error("invalid triangular parameters: lower={lower}, mode={mode}, upper={upper} (need lower < mode < upper)")]
    InvalidOrder { lower: f64, mode: f64, upper: f64 },
}

impl SamplerError {
    /// Shorthand for [`SamplerError::InvalidParameter`]
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }
}

/// Result type used by distribution constructors and setters
pub type Result<T> = std::result::Result<T, SamplerError>;

/// Require `value > 0` (and finite)
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SamplerError::invalid(name, value, "must be positive and finite"))
    }
}

/// Require `value >= 0` (and finite)
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SamplerError::invalid(name, value, "must be non-negative and finite"))
    }
}

/// Require a finite value
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SamplerError::invalid(name, value, "must be finite"))
    }
}

/// Require `0 <= value <= 1`
pub(crate) fn probability(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SamplerError::invalid(name, value, "must be in [0, 1]"))
    }
}
