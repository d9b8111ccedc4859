//! Fisher–Snedecor F distribution with `(n1, n2)` degrees of freedom
//!
//! `(X1 * n2) / (X2 * n1)` where `X1 ~ chi-square(n1)` and
//! `X2 ~ chi-square(n2)` come from two owned, independent chi-square
//! generators (Gamma path).

use super::chi_square::ChiSquare;
use super::Distribution;
use crate::error::{positive, Result};
use crate::source::UniformSource;

#[derive(Debug, Clone)]
pub struct FisherF {
    n1: f64,
    n2: f64,
    numerator: ChiSquare,
    denominator: ChiSquare,
}

impl FisherF {
    /// # Errors
    ///
    /// Fails unless both degrees of freedom are positive.
    pub fn new(n1: f64, n2: f64) -> Result<Self> {
        let n1 = positive("n1", n1)?;
        let n2 = positive("n2", n2)?;
        Ok(Self {
            n1,
            n2,
            numerator: ChiSquare::new(n1)?,
            denominator: ChiSquare::new(n2)?,
        })
    }

    pub fn n1(&self) -> f64 {
        self.n1
    }

    pub fn n2(&self) -> f64 {
        self.n2
    }

    pub fn set_n1(&mut self, n1: f64) -> Result<()> {
        let n1 = positive("n1", n1)?;
        self.numerator.set_dof(n1)?;
        self.n1 = n1;
        Ok(())
    }

    pub fn set_n2(&mut self, n2: f64) -> Result<()> {
        let n2 = positive("n2", n2)?;
        self.denominator.set_dof(n2)?;
        self.n2 = n2;
        Ok(())
    }
}

impl Distribution for FisherF {
    fn sample(&mut self, src: &mut dyn UniformSource) -> f64 {
        let x1 = self.numerator.sample_gamma(src);
        let x2 = self.denominator.sample_gamma(src);
        (x1 * self.n2) / (x2 * self.n1)
    }

    fn name(&self) -> &'static str {
        "fisher_f"
    }

    fn mean(&self) -> Option<f64> {
        let n2 = self.n2;
        (n2 > 2.0).then(|| n2 / (n2 - 2.0))
    }

    fn variance(&self) -> Option<f64> {
        let (n1, n2) = (self.n1, self.n2);
        (n2 > 4.0).then(|| {
            2.0 * n2 * n2 * (n1 + n2 - 2.0) / (n1 * (n2 - 2.0) * (n2 - 2.0) * (n2 - 4.0))
        })
    }
}
