use crate::FloatScalar;
use super::{check_prob, sample_mean, DiscreteDistribution, DistError};

/// Bernoulli distribution with success probability p.
///
/// P(X = 1) = p, P(X = 0) = 1 − p.
///
/// # Example
///
/// ```
/// use probdist::dist::{Bernoulli, DiscreteDistribution};
///
/// let b = Bernoulli::new(0.3_f64).unwrap();
/// assert!((b.pmf(1) - 0.3).abs() < 1e-14);
/// assert!((b.pmf(0) - 0.7).abs() < 1e-14);
/// assert!((b.cdf(-1)).abs() < 1e-14);
/// assert!((b.cdf(0) - 0.7).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bernoulli<T> {
    p: T,
}

impl<T: FloatScalar> Bernoulli<T> {
    /// Create a Bernoulli distribution with success probability `p`.
    /// Requires `0 ≤ p ≤ 1`.
    pub fn new(p: T) -> Result<Self, DistError> {
        if p.is_nan() || p < T::zero() || p > T::one() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { p })
    }

    /// Success probability p.
    pub fn p(&self) -> T {
        self.p
    }

    /// Replace the success probability, re-validating it.
    pub fn set_params(&mut self, p: T) -> Result<(), DistError> {
        *self = Self::new(p)?;
        Ok(())
    }

    /// Maximum-likelihood estimate p̂: the sample mean.
    ///
    /// Requires at least two observations, each exactly 0 or 1.
    pub fn mle(sample: &[T]) -> Result<T, DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        for &x in sample {
            if x != T::zero() && x != T::one() {
                return Err(DistError::UnsupportedSample);
            }
        }
        Ok(sample_mean(sample))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        Self::new(Self::mle(sample)?)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Bernoulli<T> {
    fn pmf(&self, k: i64) -> T {
        match k {
            0 => T::one() - self.p,
            1 => self.p,
            _ => T::zero(),
        }
    }

    fn ln_pmf(&self, k: i64) -> T {
        match k {
            0 => (T::one() - self.p).ln(),
            1 => self.p.ln(),
            _ => T::neg_infinity(),
        }
    }

    fn cdf(&self, k: i64) -> T {
        if k < 0 {
            T::zero()
        } else if k == 0 {
            T::one() - self.p
        } else {
            T::one()
        }
    }

    fn sf(&self, k: i64) -> T {
        if k <= 0 {
            T::one()
        } else if k == 1 {
            self.p
        } else {
            T::zero()
        }
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p <= T::one() - self.p {
            Ok(0)
        } else {
            Ok(1)
        }
    }

    fn mean(&self) -> T {
        self.p
    }

    fn variance(&self) -> T {
        self.p * (T::one() - self.p)
    }

    fn support(&self) -> (i64, i64) {
        (0, 1)
    }
}
