use crate::FloatScalar;
use crate::optim::{brent, RootSettings};
use crate::special::{betainc, lgamma};
use super::{
    check_prob, discrete_quantile_scan, sample_mean_var, DiscreteDistribution, DistError,
};

/// Negative binomial distribution: number of failures before the r-th
/// success, with real-valued r.
///
/// P(X = k) = Γ(r+k) / (Γ(r) k!) · p^r (1−p)^k for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use probdist::dist::{NegativeBinomial, DiscreteDistribution};
///
/// let nb = NegativeBinomial::new(5.0_f64, 0.5).unwrap();
/// assert!((nb.mean() - 5.0).abs() < 1e-14);
/// assert!((nb.variance() - 10.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NegativeBinomial<T> {
    r: T,
    p: T,
}

impl<T: FloatScalar> NegativeBinomial<T> {
    /// Create a negative binomial distribution with `r` successes and
    /// success probability `p`. Requires `r > 0` and `0 < p < 1`.
    pub fn new(r: T, p: T) -> Result<Self, DistError> {
        if r <= T::zero() || p.is_nan() || p <= T::zero() || p >= T::one() {
            return Err(DistError::InvalidParameter);
        }
        Ok(Self { r, p })
    }

    /// Number of successes r.
    pub fn r(&self) -> T {
        self.r
    }

    /// Success probability p.
    pub fn p(&self) -> T {
        self.p
    }

    /// Replace the parameters, re-validating them.
    pub fn set_params(&mut self, r: T, p: T) -> Result<(), DistError> {
        *self = Self::new(r, p)?;
        Ok(())
    }

    /// Maximum-likelihood estimate `(r̂, p̂)`.
    ///
    /// Solves the profile likelihood equation in r with Brent's method,
    /// seeded and bracketed around the moment estimate r₀ = x̄²/(s² − x̄),
    /// then sets p̂ = r̂/(r̂ + x̄). Requires at least two nonnegative integer
    /// observations with sample mean strictly below sample variance
    /// (otherwise the likelihood has no interior maximum).
    pub fn mle(sample: &[T]) -> Result<(T, T), DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        for &x in sample {
            if x < T::zero() || x.fract() != T::zero() {
                return Err(DistError::UnsupportedSample);
            }
        }
        let (mean, var) = sample_mean_var(sample);
        if mean <= T::zero() || var <= mean {
            return Err(DistError::UnsupportedSample);
        }
        let m = T::from(sample.len()).unwrap();

        // Profile score in r, with p eliminated via p(r) = r/(r + x̄):
        //   g(r) = Σᵢ Σ_{j<xᵢ} 1/(r+j) + m ln(r/(r + x̄))
        let score = |r: T| -> T {
            let mut s = T::zero();
            for &x in sample {
                let mut j = T::zero();
                while j < x {
                    s = s + T::one() / (r + j);
                    j = j + T::one();
                }
            }
            s + m * (r / (r + mean)).ln()
        };

        let r0 = mean * mean / (var - mean);
        let two = T::one() + T::one();
        let mut lo = r0 / two;
        let mut hi = r0 * two;
        let mut flo = score(lo);
        let mut fhi = score(hi);
        let mut tries = 0;
        while (flo > T::zero()) == (fhi > T::zero()) && tries < 60 {
            if flo.abs() < fhi.abs() {
                lo = lo / two;
                flo = score(lo);
            } else {
                hi = hi * two;
                fhi = score(hi);
            }
            tries += 1;
        }
        if (flo > T::zero()) == (fhi > T::zero()) {
            return Err(DistError::UnsupportedSample);
        }

        let settings = RootSettings {
            x_tol: T::from(1e-10).unwrap(),
            f_tol: T::from(1e-10).unwrap(),
            max_iter: 100,
        };
        let root = brent(score, lo, hi, &settings)
            .map_err(|_| DistError::UnsupportedSample)?;
        let r = root.x;
        let p = (r / (r + mean)).min(T::one() - T::from(1e-15).unwrap());
        Ok((r, p))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        let (r, p) = Self::mle(sample)?;
        Self::new(r, p)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for NegativeBinomial<T> {
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
        lgamma(self.r + kf) - lgamma(self.r) - lgamma(kf + one)
            + self.r * self.p.ln()
            + kf * (one - self.p).ln()
    }

    fn cdf(&self, k: i64) -> T {
        if k < 0 {
            return T::zero();
        }
        // P(X ≤ k) = I_p(r, k+1)
        betainc(self.r, T::from(k + 1).unwrap(), self.p).unwrap_or(T::nan())
    }

    fn sf(&self, k: i64) -> T {
        if k <= 0 {
            return T::one();
        }
        // P(X ≥ k) = I_{1-p}(k, r)
        betainc(T::from(k).unwrap(), self.r, T::one() - self.p).unwrap_or(T::nan())
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p == T::one() {
            return Ok(i64::MAX);
        }
        let one = T::one();
        let r = self.r;
        let q = self.p;
        let first = (r * q.ln()).exp();
        Ok(discrete_quantile_scan(p, 0, first, |k, term| {
            let kf = T::from(k).unwrap();
            term * (r + kf) * (one - q) / (kf + one)
        }))
    }

    fn mean(&self) -> T {
        self.r * (T::one() - self.p) / self.p
    }

    fn variance(&self) -> T {
        self.r * (T::one() - self.p) / (self.p * self.p)
    }

    fn support(&self) -> (i64, i64) {
        (0, i64::MAX)
    }
}
