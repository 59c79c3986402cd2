use crate::FloatScalar;
use super::{check_prob, DiscreteDistribution, DistError};

/// Discrete uniform distribution on the integers {i, …, j}.
///
/// # Example
///
/// ```
/// use probdist::dist::{UniformInt, DiscreteDistribution};
///
/// let d = UniformInt::<f64>::new(1, 6).unwrap();
/// assert!((d.pmf(3) - 1.0 / 6.0).abs() < 1e-14);
/// assert_eq!(d.quantile(0.999999).unwrap(), 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniformInt<T> {
    i: i64,
    j: i64,
    // Cached 1 / (j - i + 1)
    inv_n: T,
}

impl<T: FloatScalar> UniformInt<T> {
    /// Create a discrete uniform distribution on {i, …, j}. Requires `i ≤ j`.
    pub fn new(i: i64, j: i64) -> Result<Self, DistError> {
        if i > j {
            return Err(DistError::InvalidParameter);
        }
        let n = T::from(j - i + 1).unwrap();
        Ok(Self {
            i,
            j,
            inv_n: T::one() / n,
        })
    }

    /// Replace the bounds, re-validating them.
    pub fn set_params(&mut self, i: i64, j: i64) -> Result<(), DistError> {
        *self = Self::new(i, j)?;
        Ok(())
    }

    /// Maximum-likelihood estimate `(î, ĵ)`: the sample minimum and maximum,
    /// rounded to integers.
    ///
    /// Requires at least two observations.
    pub fn mle(sample: &[T]) -> Result<(i64, i64), DistError> {
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
        let (lo, hi) = match (lo.round().to_f64(), hi.round().to_f64()) {
            (Some(a), Some(b)) => (a as i64, b as i64),
            _ => return Err(DistError::UnsupportedSample),
        };
        Ok((lo, hi))
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        let (i, j) = Self::mle(sample)?;
        Self::new(i, j)
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for UniformInt<T> {
    fn pmf(&self, k: i64) -> T {
        if k < self.i || k > self.j {
            T::zero()
        } else {
            self.inv_n
        }
    }

    fn ln_pmf(&self, k: i64) -> T {
        if k < self.i || k > self.j {
            T::neg_infinity()
        } else {
            self.inv_n.ln()
        }
    }

    fn cdf(&self, k: i64) -> T {
        if k < self.i {
            T::zero()
        } else if k >= self.j {
            T::one()
        } else {
            T::from(k - self.i + 1).unwrap() * self.inv_n
        }
    }

    fn sf(&self, k: i64) -> T {
        if k <= self.i {
            T::one()
        } else if k > self.j {
            T::zero()
        } else {
            T::from(self.j - k + 1).unwrap() * self.inv_n
        }
    }

    fn quantile(&self, p: T) -> Result<i64, DistError> {
        check_prob(p)?;
        if p == T::zero() {
            return Ok(self.i);
        }
        // Smallest k with (k - i + 1) / n >= p
        let n = T::from(self.j - self.i + 1).unwrap();
        let raw = (p * n).ceil();
        let offset = match raw.to_f64() {
            Some(v) if v >= 1.0 => (v as i64) - 1,
            _ => 0,
        };
        Ok((self.i + offset).min(self.j))
    }

    fn mean(&self) -> T {
        let two = T::one() + T::one();
        T::from(self.i + self.j).unwrap() / two
    }

    fn variance(&self) -> T {
        // (n² - 1) / 12 with n = j - i + 1
        let n = T::from(self.j - self.i + 1).unwrap();
        let twelve = T::from(12.0).unwrap();
        (n * n - T::one()) / twelve
    }

    fn support(&self) -> (i64, i64) {
        (self.i, self.j)
    }
}
