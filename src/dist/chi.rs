use crate::FloatScalar;
use crate::special::{gamma_half_ratio, lgamma};
use super::{check_prob, ContinuousDistribution, DistError, Gamma};

/// Chi distribution with ν degrees of freedom (integer).
///
/// The square of a chi variate is chi-squared: the CDF, complementary CDF,
/// and quantile are mapped through an underlying Gamma(ν/2, 1) distribution
/// via x ↦ x²/2.
///
/// # Example
///
/// ```
/// use probdist::dist::{Chi, ContinuousDistribution};
///
/// // ν = 3 is the Maxwell-Boltzmann speed distribution shape
/// let c = Chi::new(3).unwrap();
/// assert!((c.cdf(0.0_f64)).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Chi<T> {
    nu: u32,
    base: Gamma<T>,
    // Cached ln normalization: (ν/2 − 1) ln 2 + ln Γ(ν/2)
    ln_c: T,
}

impl<T: FloatScalar> Chi<T> {
    /// Create a chi distribution with `nu` degrees of freedom. Requires `nu ≥ 1`.
    pub fn new(nu: u32) -> Result<Self, DistError> {
        if nu == 0 {
            return Err(DistError::InvalidParameter);
        }
        let two = T::one() + T::one();
        let half_nu = T::from(nu).unwrap() / two;
        let base = Gamma::new(half_nu, T::one())?;
        Ok(Self {
            nu,
            base,
            ln_c: (half_nu - T::one()) * two.ln() + lgamma(half_nu),
        })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> u32 {
        self.nu
    }

    /// Replace the degrees of freedom, re-validating them and rebuilding the
    /// underlying gamma distribution.
    pub fn set_params(&mut self, nu: u32) -> Result<(), DistError> {
        *self = Self::new(nu)?;
        Ok(())
    }

    /// Maximum-likelihood estimate of ν: an integer search maximizing the
    /// log-likelihood, seeded by the moment relation E[X²] = ν.
    ///
    /// Requires at least two observations, all positive.
    pub fn mle(sample: &[T]) -> Result<u32, DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        let mut sum_ln = T::zero();
        let mut sum_sq = T::zero();
        for &x in sample {
            if x <= T::zero() {
                return Err(DistError::UnsupportedSample);
            }
            sum_ln = sum_ln + x.ln();
            sum_sq = sum_sq + x * x;
        }
        let m = T::from(sample.len()).unwrap();
        let two = T::one() + T::one();
        let half_ln2 = two.ln() / two;

        // Log-likelihood increment from k to k+1:
        //   Δ(k) = Σ ln xᵢ − m (½ ln 2 + ln Γ((k+1)/2) − ln Γ(k/2))
        let delta = |k: u32| -> T {
            let kf = T::from(k).unwrap();
            sum_ln
                - m * (half_ln2 + lgamma((kf + T::one()) / two) - lgamma(kf / two))
        };

        let seed = match (sum_sq / m).round().to_f64() {
            Some(v) if v >= 1.0 => v as u32,
            _ => 1,
        };
        let mut k = seed.max(1);
        if delta(k) > T::zero() {
            // Likelihood still rising: walk up
            while delta(k) > T::zero() {
                k += 1;
            }
        } else {
            // Walk down until the increment from k-1 to k would be positive
            while k > 1 && delta(k - 1) <= T::zero() {
                k -= 1;
            }
        }
        Ok(k)
    }

    /// Create a distribution from the maximum-likelihood estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        Self::new(Self::mle(sample)?)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Chi<T> {
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
        let nuf = T::from(self.nu).unwrap();
        (nuf - one) * x.ln() - x * x / two - self.ln_c
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        let two = T::one() + T::one();
        self.base.cdf(x * x / two)
    }

    fn sf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::one();
        }
        let two = T::one() + T::one();
        self.base.sf(x * x / two)
    }

    fn quantile(&self, p: T) -> Result<T, DistError> {
        check_prob(p)?;
        if p == T::zero() {
            return Ok(T::zero());
        }
        if p == T::one() {
            return Ok(T::infinity());
        }
        let two = T::one() + T::one();
        Ok((two * self.base.quantile(p)?).sqrt())
    }

    fn mean(&self) -> T {
        // √2 Γ((ν+1)/2) / Γ(ν/2)
        let two = T::one() + T::one();
        let half_nu = T::from(self.nu).unwrap() / two;
        two.sqrt() * gamma_half_ratio(half_nu)
    }

    fn variance(&self) -> T {
        let m = self.mean();
        T::from(self.nu).unwrap() - m * m
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
