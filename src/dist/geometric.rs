use crate::FloatScalar;
use super::{check_prob, sample_mean, DiscreteDistribution, DistError};

/// Geometric distribution: number of failures before the first success.
///
/// P(X = k) = p (1−p)^k for k = 0, 1, 2, …
///
/// The CDF and quantile are closed-form, so no series evaluation is needed.
///
/// # Example
///
/// ```
/// use probdist::dist::{Geometric, DiscreteDistribution};
///
/// let g = Geometric::new(0.5_f64).unwrap();
/// assert!((g.pmf(0) - 0.5).abs() < 1e-14);
/// assert!((g.cdf(1) - 0.75).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Geometric<T> {
    p: T,
    // Cached ln(1 - p), used by cdf, sf, and quantile.
    ln_q: T,
}

impl<T: FloatScalar> Geometric<T> {
    /// Create a geometric distribution with success probability `p`.
    /// Requires `0 < p < 1`.
    pub fn new(p: T) -> Result<Self, DistError> {
        if p.is_nan() || p <= T::zero() || p >= T::one() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self {
            p,
            ln_q: (T::one() - p).ln(),
        })
    }

    /// Success probability p.
    pub fn p(&self) -> T {
        self.p
    }

    /// Replace the success probability, re-validating it and refreshing the
    /// cached constant.
    pub fn set_params(&mut self, p: T) -> Result<(), DistError> {
        *self = Self::new(p)?;
        Ok(())
    }

    /// Maximum-likelihood estimate p̂ = 1/(x̄ + 1).
    ///
    /// Requires at least two observations, all nonnegative.
    pub fn mle(sample: &[T]) -> Result<T, DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        for &x in sample {
            if x < T::zero() {
                return Err(DistError::UnsupportedSample);
            }
        }
        Ok(T::one() / (sample_mean(sample) + T::one()))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        Self::new(Self::mle(sample)?)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Geometric<T> {
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
        self.p.ln() + T::from(k).unwrap() * self.ln_q
    }

    fn cdf(&self, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        // 1 - (1-p)^{k+1}
        T::one() - (T::from(k + 1).unwrap() * self.ln_q).exp()
    }

    fn sf(&self, k: i64) -> T {
        if k <= 0 {
            return T::one();
        }
        // P(X ≥ k) = (1-p)^k
        (T::from(k).unwrap() * self.ln_q).exp()
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p == T::zero() {
            return Ok(0);
        }
        if p == T::one() {
            return Ok(i64::MAX);
        }
        // Smallest k with 1 - (1-p)^{k+1} >= u, i.e. k >= ln(1-u)/ln(1-p) - 1
        let one = T::one();
        let raw = ((one - p).ln() / self.ln_q - one).ceil();
        let mut k = match raw.to_f64() {
            Some(v) if v >= 0.0 => v as i64,
            _ => 0,
        };
        // Rounding guard: verify against the closed-form CDF on both sides
        while k > 0 && self.cdf(k - 1) >= p {
            k -= 1;
        }
        while self.cdf(k) < p {
            k += 1;
        }
        Ok(k)
    }

    fn mean(&self) -> T {
        (T::one() - self.p) / self.p
    }

    fn variance(&self) -> T {
        (T::one() - self.p) / (self.p * self.p)
    }

    fn support(&self) -> (i64, i64) {
        (0, i64::MAX)
    }
}
