use crate::FloatScalar;
use crate::special::{gamma_inc, gamma_inc_upper, lgamma};
use super::{check_prob, discrete_quantile_scan, sample_mean, DiscreteDistribution, DistError};

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use probdist::dist::{Poisson, DiscreteDistribution};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert!((p.variance() - 3.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, DistError> {
        if lambda <= T::zero() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> T {
        self.lambda
    }

    /// Replace the rate, re-validating it.
    pub fn set_params(&mut self, lambda: T) -> Result<(), DistError> {
        *self = Self::new(lambda)?;
        Ok(())
    }

    /// Maximum-likelihood estimate λ̂ = x̄.
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
        Ok(mean)
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        Self::new(Self::mle(sample)?)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: i64) -> T {
        if k < 0 {
            return T::neg_infinity();
        }
        let one = T::one();
        let kf = T::from(k).unwrap();
        kf * self.lambda.ln() - self.lambda - lgamma(kf + one)
    }

    fn cdf(&self, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        // P(X ≤ k) = Q(k+1, λ) = gamma_inc_upper(k+1, λ)
        let a = T::from(k + 1).unwrap();
        gamma_inc_upper(a, self.lambda).unwrap_or(T::nan())
    }

    fn sf(&self, k: i64) -> T {
        if k <= 0 {
            return T::one();
        }
        // P(X ≥ k) = P(k, λ) = gamma_inc(k, λ)
        let a = T::from(k).unwrap();
        gamma_inc(a, self.lambda).unwrap_or(T::nan())
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p == T::one() {
            return Ok(i64::MAX);
        }
        let lam = self.lambda;
        let first = (-lam).exp();
        Ok(discrete_quantile_scan(p, 0, first, |k, term| {
            term * lam / T::from(k + 1).unwrap()
        }))
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }

    fn support(&self) -> (i64, i64) {
        (0, i64::MAX)
    }
}
