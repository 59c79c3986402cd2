use crate::FloatScalar;
use super::{check_prob, sample_mean, ContinuousDistribution, DistError};

/// Exponential distribution with rate λ.
///
/// f(x) = λ exp(−λx) for x ≥ 0.
///
/// # Example
///
/// ```
/// use probdist::dist::{Exponential, ContinuousDistribution};
///
/// let e = Exponential::new(2.0_f64).unwrap();
/// assert!((e.mean() - 0.5).abs() < 1e-14);
/// assert!((e.cdf(0.0)).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exponential<T> {
    lambda: T,
}

impl<T: FloatScalar> Exponential<T> {
    /// Create an exponential distribution with rate `lambda`. Requires `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, DistError> {
        if lambda <= T::zero() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// Replace the rate, re-validating it.
    pub fn set_params(&mut self, lambda: T) -> Result<(), DistError> {
        *self = Self::new(lambda)?;
        Ok(())
    }

    /// Maximum-likelihood estimate λ̂ = 1/x̄.
    ///
    /// Requires at least two observations, all nonnegative, with a
    /// positive mean.
    pub fn mle(sample: &[T]) -> Result<T, DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        for &x in sample {
            if x < T::zero() {
                return Err(DistError::UnsupportedSample);
            }
        }
        let mean = sample_mean(sample);
        if mean <= T::zero() {
            return Err(DistError::UnsupportedSample);
        }
        Ok(T::one() / mean)
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        Self::new(Self::mle(sample)?)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Exponential<T> {
    fn pdf(&self, x: T) -> T {
        if x < T::zero() {
            T::zero()
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < T::zero() {
            T::neg_infinity()
        } else {
            self.lambda.ln() - self.lambda * x
        }
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            T::zero()
        } else {
            T::one() - (-self.lambda * x).exp()
        }
    }

    fn sf(&self, x: T) -> T {
        if x <= T::zero() {
            T::one()
        } else {
            (-self.lambda * x).exp()
        }
    }

    fn quantile(&self, p: T) -> Result<T, DistError> {
        check_prob(p)?;
        if p == T::one() {
            return Ok(T::infinity());
        }
        Ok(-(T::one() - p).ln() / self.lambda)
    }

    fn mean(&self) -> T {
        T::one() / self.lambda
    }

    fn variance(&self) -> T {
        T::one() / (self.lambda * self.lambda)
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
