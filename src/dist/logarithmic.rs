use crate::FloatScalar;
use crate::optim::{brent, RootSettings};
use super::{check_prob, discrete_quantile_scan, sample_mean, DiscreteDistribution, DistError};

/// Logarithmic (log-series) distribution with shape θ.
///
/// P(X = k) = −θᵏ / (k ln(1−θ)) for k = 1, 2, 3, …
///
/// # Example
///
/// ```
/// use probdist::dist::{Logarithmic, DiscreteDistribution};
///
/// let d = Logarithmic::new(0.5_f64).unwrap();
/// let expected = 0.5 / core::f64::consts::LN_2;
/// assert!((d.pmf(1) - expected).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logarithmic<T> {
    theta: T,
    // Cached −1/ln(1−θ), the normalization of the series
    t: T,
}

/// Upper-tail series terms cap. The geometric decay makes convergence fast
/// for any θ bounded away from 1.
const MAX_TAIL_TERMS: usize = 10_000;

impl<T: FloatScalar> Logarithmic<T> {
    /// Create a logarithmic distribution with shape `theta`.
    /// Requires `0 < theta < 1`.
    pub fn new(theta: T) -> Result<Self, DistError> {
        if theta.is_nan() || theta <= T::zero() || theta >= T::one() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self {
            theta,
            t: -T::one() / (T::one() - theta).ln(),
        })
    }

    /// Shape parameter θ.
    pub fn theta(&self) -> T {
        self.theta
    }

    /// Replace the shape, re-validating it and refreshing the cached
    /// normalization.
    pub fn set_params(&mut self, theta: T) -> Result<(), DistError> {
        *self = Self::new(theta)?;
        Ok(())
    }

    /// Maximum-likelihood estimate θ̂: the root of the mean equation
    /// −θ/((1−θ) ln(1−θ)) = x̄, solved with Brent's method.
    ///
    /// Requires at least two integer observations ≥ 1 with sample mean
    /// strictly above 1 (the distribution's mean exceeds 1 for every θ).
    pub fn mle(sample: &[T]) -> Result<T, DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        for &x in sample {
            if x < T::one() || x.fract() != T::zero() {
                return Err(DistError::UnsupportedSample);
            }
        }
        let mean = sample_mean(sample);
        if mean <= T::one() {
            return Err(DistError::UnsupportedSample);
        }
        let one = T::one();
        let f = move |th: T| -th / ((one - th) * (one - th).ln()) - mean;
        let eps = T::from(1e-15).unwrap();
        let settings = RootSettings {
            x_tol: T::from(1e-12).unwrap(),
            f_tol: T::from(1e-10).unwrap(),
            max_iter: 100,
        };
        let root =
            brent(f, eps, one - eps, &settings).map_err(|_| DistError::UnsupportedSample)?;
        Ok(root.x)
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        Self::new(Self::mle(sample)?)
    }

    /// Tail series t · Σ_{i ≥ k} θⁱ/i, used by both cdf and sf.
    fn tail_sum(&self, k: i64) -> T {
        let one = T::one();
        let kf = T::from(k).unwrap();
        let mut term = (kf * self.theta.ln()).exp() / kf;
        let mut sum = term;
        let mut i = k;
        let mut iters = 0usize;
        let tol = T::from(0.5e-16).unwrap();
        loop {
            let ifl = T::from(i).unwrap();
            term = term * self.theta * ifl / (ifl + one);
            i += 1;
            sum = sum + term;
            iters += 1;
            if term < sum * tol {
                break;
            }
            if iters >= MAX_TAIL_TERMS {
                log::warn!(
                    "logarithmic tail series hit term cap; returning partial sum"
                );
                break;
            }
        }
        self.t * sum
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Logarithmic<T> {
    fn pmf(&self, k: i64) -> T {
        if k < 1 {
            return T::zero();
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: i64) -> T {
        if k < 1 {
            return T::neg_infinity();
        }
        self.t.ln() + T::from(k).unwrap() * self.theta.ln() - T::from(k).unwrap().ln()
    }

    fn cdf(&self, k: i64) -> T {
        if k < 1 {
            return T::zero();
        }
        T::one() - self.tail_sum(k + 1)
    }

    fn sf(&self, k: i64) -> T {
        if k <= 1 {
            return T::one();
        }
        self.tail_sum(k)
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p == T::one() {
            return Ok(i64::MAX);
        }
        let one = T::one();
        let th = self.theta;
        let first = self.t * th;
        Ok(discrete_quantile_scan(p, 1, first, |k, term| {
            let kf = T::from(k).unwrap();
            term * th * kf / (kf + one)
        }))
    }

    fn mean(&self) -> T {
        self.t * self.theta / (T::one() - self.theta)
    }

    fn variance(&self) -> T {
        let one = T::one();
        let q = one - self.theta;
        let l = q.ln();
        -self.theta * (self.theta + l) / (q * q * l * l)
    }

    fn support(&self) -> (i64, i64) {
        (1, i64::MAX)
    }
}
