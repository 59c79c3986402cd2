use crate::FloatScalar;
use crate::special::{erf, erfc};
use super::{
    check_prob, normal_quantile_standard, sample_mean_var, ContinuousDistribution, DistError,
};

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// Serves as the asymptotic primitive for several other families: the
/// quick chi-squared and Student approximations map through the standard
/// normal CDF and quantile.
///
/// # Example
///
/// ```
/// use probdist::dist::{Normal, ContinuousDistribution};
///
/// let n = Normal::new(0.0_f64, 1.0).unwrap();
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
/// assert!((n.quantile(0.975).unwrap() - 1.96).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal<T> {
    mu: T,
    sigma: T,
}

impl<T: FloatScalar> Normal<T> {
    /// Create a normal distribution with mean `mu` and standard deviation `sigma`.
    ///
    /// Requires `sigma > 0`.
    pub fn new(mu: T, sigma: T) -> Result<Self, DistError> {
        if sigma <= T::zero() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { mu, sigma })
    }

    /// Standard normal CDF Φ(x).
    pub fn cdf01(x: T) -> T {
        let half = T::from(0.5).unwrap();
        let sqrt2 = T::from(core::f64::consts::SQRT_2).unwrap();
        let z = x / sqrt2;
        if z >= T::zero() {
            half * (T::one() + erf(z))
        } else {
            half * erfc(-z)
        }
    }

    /// Standard normal quantile Φ⁻¹(p) for `p ∈ (0, 1)`.
    pub fn quantile01(p: T) -> T {
        normal_quantile_standard(p)
    }

    /// Replace the parameters, re-validating them.
    pub fn set_params(&mut self, mu: T, sigma: T) -> Result<(), DistError> {
        *self = Self::new(mu, sigma)?;
        Ok(())
    }

    /// Maximum-likelihood estimate `(μ̂, σ̂)` from a sample.
    ///
    /// `μ̂` is the sample mean, `σ̂` the square root of the biased (1/m)
    /// sample variance. Requires at least two observations and a
    /// non-degenerate sample.
    pub fn mle(sample: &[T]) -> Result<(T, T), DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        let (mean, var) = sample_mean_var(sample);
        if var <= T::zero() {
            return Err(DistError::UnsupportedSample);
        }
        Ok((mean, var.sqrt()))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        let (mu, sigma) = Self::mle(sample)?;
        Self::new(mu, sigma)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Normal<T> {
    fn pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let pi = T::from(core::f64::consts::PI).unwrap();
        let z = (x - self.mu) / self.sigma;
        (-(z * z) / two).exp() / (self.sigma * (two * pi).sqrt())
    }

    fn ln_pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let pi = T::from(core::f64::consts::PI).unwrap();
        let z = (x - self.mu) / self.sigma;
        -self.sigma.ln() - (two * pi).ln() / two - z * z / two
    }

    fn cdf(&self, x: T) -> T {
        Self::cdf01((x - self.mu) / self.sigma)
    }

    fn sf(&self, x: T) -> T {
        // Mirror of cdf; computed directly to avoid cancellation in the
        // upper tail.
        Self::cdf01((self.mu - x) / self.sigma)
    }

    fn quantile(&self, p: T) -> Result<T, DistError> {
        check_prob(p)?;
        if p == T::zero() {
            return Ok(T::neg_infinity());
        }
        if p == T::one() {
            return Ok(T::infinity());
        }
        Ok(self.mu + self.sigma * normal_quantile_standard(p))
    }

    fn mean(&self) -> T {
        self.mu
    }

    fn variance(&self) -> T {
        self.sigma * self.sigma
    }

    fn support(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }
}
