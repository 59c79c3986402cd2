use crate::FloatScalar;
use super::{check_prob, ContinuousDistribution, DistError};

/// Continuous uniform distribution on [a, b].
///
/// # Example
///
/// ```
/// use probdist::dist::{Uniform, ContinuousDistribution};
///
/// let u = Uniform::new(0.0_f64, 1.0).unwrap();
/// assert!((u.pdf(0.5) - 1.0).abs() < 1e-14);
/// assert!((u.cdf(0.5) - 0.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uniform<T> {
    a: T,
    b: T,
}

impl<T: FloatScalar> Uniform<T> {
    /// Create a uniform distribution on [a, b]. Requires `a < b`.
    pub fn new(a: T, b: T) -> Result<Self, DistError> {
        if !(a < b) {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { a, b })
    }

    /// Replace the parameters, re-validating them.
    pub fn set_params(&mut self, a: T, b: T) -> Result<(), DistError> {
        *self = Self::new(a, b)?;
        Ok(())
    }

    /// Maximum-likelihood estimate `(â, b̂)`: the sample minimum and maximum.
    ///
    /// Requires at least two observations and a non-degenerate sample.
    pub fn mle(sample: &[T]) -> Result<(T, T), DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        let mut lo = sample[0];
        let mut hi = sample[0];
        for &x in &sample[1..] {
            if x < lo {
                lo = x;
            }
            if x > hi {
                hi = x;
            }
        }
        if !(lo < hi) {
            return Err(DistError::UnsupportedSample);
        }
        Ok((lo, hi))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        let (a, b) = Self::mle(sample)?;
        Self::new(a, b)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Uniform<T> {
    fn pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            T::one() / (self.b - self.a)
        } else {
            T::zero()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            -((self.b - self.a).ln())
        } else {
            T::neg_infinity()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x <= self.a {
            T::zero()
        } else if x >= self.b {
            T::one()
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }

    fn quantile(&self, p: T) -> Result<T, DistError> {
        check_prob(p)?;
        Ok(self.a + p * (self.b - self.a))
    }

    fn mean(&self) -> T {
        let two = T::one() + T::one();
        (self.a + self.b) / two
    }

    fn variance(&self) -> T {
        let twelve = T::from(12.0).unwrap();
        let d = self.b - self.a;
        d * d / twelve
    }

    fn support(&self) -> (T, T) {
        (self.a, self.b)
    }
}
