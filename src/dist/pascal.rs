use crate::FloatScalar;
use super::{DiscreteDistribution, DistError, NegativeBinomial};

/// Pascal distribution: negative binomial with integer success count n.
///
/// All evaluations are forwarded to an underlying [`NegativeBinomial`];
/// estimation rounds the real-valued r̂ to the nearest integer ≥ 1.
///
/// # Example
///
/// ```
/// use probdist::dist::{Pascal, DiscreteDistribution};
///
/// let pa = Pascal::new(3, 0.4_f64).unwrap();
/// assert!((pa.mean() - 4.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pascal<T> {
    n: u32,
    base: NegativeBinomial<T>,
}

impl<T: FloatScalar> Pascal<T> {
    /// Create a Pascal distribution with `n` successes and success
    /// probability `p`. Requires `n ≥ 1` and `0 < p < 1`.
    pub fn new(n: u32, p: T) -> Result<Self, DistError> {
        if n == 0 {
            return Err(DistError::InvalidParameter);
        }
        let base = NegativeBinomial::new(T::from(n).unwrap(), p)?;
        Ok(Self { n, base })
    }

    /// Number of successes n.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Success probability p.
    pub fn p(&self) -> T {
        self.base.p()
    }

    /// Replace the parameters, re-validating them.
    pub fn set_params(&mut self, n: u32, p: T) -> Result<(), DistError> {
        *self = Self::new(n, p)?;
        Ok(())
    }

    /// Maximum-likelihood estimate `(n̂, p̂)`: the real-valued negative
    /// binomial fit with r̂ rounded to the nearest integer ≥ 1 and p̂
    /// recomputed as n̂/(n̂ + x̄).
    ///
    /// Shares the negative binomial preconditions, in particular sample
    /// mean strictly below sample variance.
    pub fn mle(sample: &[T]) -> Result<(u32, T), DistError> {
        let (r, _p) = NegativeBinomial::mle(sample)?;
        let n = match r.round().to_f64() {
            Some(v) if v >= 1.0 => v as u32,
            _ => 1,
        };
        let mut mean = T::zero();
        for &x in sample {
            mean = mean + x;
        }
        mean = mean / T::from(sample.len()).unwrap();
        let nf = T::from(n).unwrap();
        let p = (nf / (nf + mean)).min(T::one() - T::from(1e-15).unwrap());
        Ok((n, p))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        let (n, p) = Self::mle(sample)?;
        Self::new(n, p)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Pascal<T> {
    fn pmf(&self, k: i64) -> T {
        self.base.pmf(k)
    }

    fn ln_pmf(&self, k: i64) -> T {
        self.base.ln_pmf(k)
    }

    fn cdf(&self, k: i64) -> T {
        self.base.cdf(k)
    }

    fn sf(&self, k: i64) -> T {
        self.base.sf(k)
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        self.base.quantile(p)
    }

    fn mean(&self) -> T {
        self.base.mean()
    }

    fn variance(&self) -> T {
        self.base.variance()
    }

    fn support(&self) -> (i64, i64) {
        self.base.support()
    }
}
