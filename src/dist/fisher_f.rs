use crate::FloatScalar;
use crate::special::lbeta;
use super::{check_prob, ContinuousDistribution, DistError, Beta};

/// Fisher-Snedecor F distribution with n1 and n2 degrees of freedom.
///
/// The CDF, complementary CDF, and quantile are mapped through an underlying
/// Beta(n1/2, n2/2) distribution via y = n1·x / (n1·x + n2).
///
/// # Example
///
/// ```
/// use probdist::dist::{FisherF, ContinuousDistribution};
///
/// let f = FisherF::new(5.0_f64, 10.0).unwrap();
/// assert!((f.mean() - 10.0 / 8.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FisherF<T> {
    n1: T,
    n2: T,
    base: Beta<T>,
    // Cached ln normalization: ln B(n1/2, n2/2) − (n1/2) ln(n1/n2)
    ln_c: T,
}

impl<T: FloatScalar> FisherF<T> {
    /// Create an F distribution with `n1` and `n2` degrees of freedom.
    /// Requires both > 0.
    pub fn new(n1: T, n2: T) -> Result<Self, DistError> {
        if n1 <= T::zero() || n2 <= T::zero() {
            return Err(DistError::InvalidParameter);
        }
        let two = T::one() + T::one();
        let base = Beta::new(n1 / two, n2 / two)?;
        Ok(Self {
            n1,
            n2,
            base,
            ln_c: lbeta(n1 / two, n2 / two) - n1 / two * (n1 / n2).ln(),
        })
    }

    /// Replace the parameters, re-validating them and rebuilding the
    /// underlying beta distribution.
    pub fn set_params(&mut self, n1: T, n2: T) -> Result<(), DistError> {
        *self = Self::new(n1, n2)?;
        Ok(())
    }

    /// Transform x into the beta argument y = n1·x / (n1·x + n2).
    fn to_beta(&self, x: T) -> T {
        let w = self.n1 * x;
        w / (w + self.n2)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for FisherF<T> {
    fn pdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::neg_infinity();
        }
        let one = T::one();
        let two = one + one;
        (self.n1 / two - one) * x.ln()
            - (self.n1 + self.n2) / two * (one + self.n1 * x / self.n2).ln()
            - self.ln_c
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        self.base.cdf(self.to_beta(x))
    }

    fn sf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::one();
        }
        self.base.sf(self.to_beta(x))
    }

    fn quantile(&self, p: T) -> Result<T, DistError> {
        check_prob(p)?;
        if p == T::zero() {
            return Ok(T::zero());
        }
        if p == T::one() {
            return Ok(T::infinity());
        }
        let z = self.base.quantile(p)?;
        if z >= T::one() {
            return Ok(T::infinity());
        }
        Ok(self.n2 * z / (self.n1 * (T::one() - z)))
    }

    fn mean(&self) -> T {
        let two = T::one() + T::one();
        if self.n2 > two {
            self.n2 / (self.n2 - two)
        } else {
            T::nan()
        }
    }

    fn variance(&self) -> T {
        let one = T::one();
        let two = one + one;
        let four = two + two;
        if self.n2 > four {
            let d = self.n2 - two;
            two * self.n2 * self.n2 * (self.n1 + self.n2 - two)
                / (self.n1 * d * d * (self.n2 - four))
        } else if self.n2 > two {
            T::infinity()
        } else {
            T::nan()
        }
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
