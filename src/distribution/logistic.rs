//! Standard logistic distribution
//!
//! Inversion: `ln((1 - u) / u)`, redrawing `u == 0`.
//!
//! The standard logistic has standard deviation `π / √3`, not 1, so
//! [`Distribution::normalize`] first divides by that spread before applying
//! the requested stdev. A normalized batch therefore really has the
//! requested mean and standard deviation.

use super::{open_unit, Distribution};
use crate::source::UniformSource;
use std::f64::consts::PI;

/// Standard deviation of the standard logistic distribution
pub const LOGISTIC_STDEV: f64 = PI / 1.732_050_807_568_877_2;

#[derive(Debug, Clone, Default)]
pub struct Logistic;

impl Logistic {
    pub fn new() -> Self {
        Self
    }
}

impl Distribution for Logistic {
    #[inline]
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let u = open_unit(src);
        ((1.0 - u) / u).ln()
    }

    fn name(&self) -> &'static str {
        "logistic"
    }

    fn normalize(&self, value: f64, mean: f64, stdev: f64) -> f64 {
        value * (stdev / LOGISTIC_STDEV) + mean
    }

    fn mean(&self) -> Option<f64> {
        Some(0.0)
    }

    fn variance(&self) -> Option<f64> {
        Some(PI * PI / 3.0)
    }
}
