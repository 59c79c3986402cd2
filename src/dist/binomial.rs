use crate::FloatScalar;
use super::{check_prob, discrete_quantile_scan, DiscreteDistribution, DistError};
use crate::special::{betainc, lgamma};

/// Binomial distribution B(n, p).
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n.
///
/// # Example
///
/// ```
/// use probdist::dist::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5_f64).unwrap();
/// assert!((b.mean() - 5.0).abs() < 1e-14);
/// assert!((b.variance() - 2.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial<T> {
    n: u64,
    p: T,
}

impl<T: FloatScalar> Binomial<T> {
    /// Create a binomial distribution with `n` trials and success probability `p`.
    /// Requires `0 ≤ p ≤ 1`.
    pub fn new(n: u64, p: T) -> Result<Self, DistError> {
        if p.is_nan() || p < T::zero() || p > T::one() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { n, p })
    }

    /// Number of trials n.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability p.
    pub fn p(&self) -> T {
        self.p
    }

    /// Replace the parameters, re-validating them.
    pub fn set_params(&mut self, n: u64, p: T) -> Result<(), DistError> {
        *self = Self::new(n, p)?;
        Ok(())
    }

    /// Maximum-likelihood estimate p̂ = x̄/n for a known trial count `n`.
    ///
    /// Requires at least two observations, each an integer in `[0, n]`.
    pub fn mle_p(sample: &[T], n: u64) -> Result<T, DistError> {
        if sample.len() < 2 || n == 0 {
            return Err(DistError::UnsupportedSample);
        }
        let nf = T::from(n).unwrap();
        let mut sum = T::zero();
        for &x in sample {
            if x < T::zero() || x > nf || x.fract() != T::zero() {
                return Err(DistError::UnsupportedSample);
            }
            sum = sum + x;
        }
        Ok(sum / (T::from(sample.len()).unwrap() * nf))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample
    /// with a known trial count `n`.
    pub fn from_mle(sample: &[T], n: u64) -> Result<Self, DistError> {
        Self::new(n, Self::mle_p(sample, n)?)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
    fn pmf(&self, k: i64) -> T {
        if k < 0 || k as u64 > self.n {
            return T::zero();
        }
        // Degenerate endpoints: all mass at 0 or n
        if self.p == T::zero() {
            return if k == 0 { T::one() } else { T::zero() };
        }
        if self.p == T::one() {
            return if k as u64 == self.n { T::one() } else { T::zero() };
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: i64) -> T {
        if k < 0 || k as u64 > self.n {
            return T::neg_infinity();
        }
        if self.p == T::zero() || self.p == T::one() {
            return self.pmf(k).ln();
        }
        let one = T::one();
        let nf = T::from(self.n).unwrap();
        let kf = T::from(k).unwrap();
        lgamma(nf + one) - lgamma(kf + one) - lgamma(nf - kf + one)
            + kf * self.p.ln()
            + (nf - kf) * (one - self.p).ln()
    }

    fn cdf(&self, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        if k as u64 >= self.n {
            return T::one();
        }
        if self.p == T::zero() {
            return T::one();
        }
        if self.p == T::one() {
            return T::zero(); // k < n here
        }
        let one = T::one();
        // P(X ≤ k) = I_{1-p}(n-k, k+1)
        let a = T::from(self.n - k as u64).unwrap();
        let b = T::from(k + 1).unwrap();
        betainc(a, b, one - self.p).unwrap_or(T::nan())
    }

    fn sf(&self, k: i64) -> T {
        if k <= 0 {
            return T::one();
        }
        if k as u64 > self.n {
            return T::zero();
        }
        if self.p == T::zero() {
            return T::zero(); // k >= 1 here
        }
        if self.p == T::one() {
            return T::one();
        }
        // P(X ≥ k) = I_p(k, n-k+1)
        let a = T::from(k).unwrap();
        let b = T::from(self.n - k as u64 + 1).unwrap();
        betainc(a, b, self.p).unwrap_or(T::nan())
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p == T::one() {
            return Ok(self.n as i64);
        }
        if self.p == T::zero() {
            return Ok(0);
        }
        if self.p == T::one() {
            return Ok(if p == T::zero() { 0 } else { self.n as i64 });
        }
        let one = T::one();
        let n = self.n;
        let q = self.p;
        // (1-p)^n through the log to keep n as a float; an i32 exponent
        // would truncate large trial counts
        let first = (T::from(n).unwrap() * (one - q).ln()).exp();
        let k = discrete_quantile_scan(p, 0, first, |k, term| {
            let kf = T::from(k).unwrap();
            let nf = T::from(n).unwrap();
            term * (nf - kf) / (kf + one) * q / (one - q)
        });
        Ok(k.min(n as i64))
    }

    fn mean(&self) -> T {
        T::from(self.n).unwrap() * self.p
    }

    fn variance(&self) -> T {
        T::from(self.n).unwrap() * self.p * (T::one() - self.p)
    }

    fn support(&self) -> (i64, i64) {
        (0, self.n as i64)
    }
}
