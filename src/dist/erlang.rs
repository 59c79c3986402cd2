use crate::FloatScalar;
use super::{sample_mean_var, ContinuousDistribution, DistError, Gamma};

/// Erlang distribution: Gamma with integer shape k and rate λ.
///
/// The sum of k independent Exponential(λ) variates. All evaluations are
/// forwarded to an underlying [`Gamma`] distribution.
///
/// # Example
///
/// ```
/// use probdist::dist::{Erlang, ContinuousDistribution};
///
/// let e = Erlang::new(3, 2.0_f64).unwrap();
/// assert!((e.mean() - 1.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Erlang<T> {
    k: u32,
    base: Gamma<T>,
}

impl<T: FloatScalar> Erlang<T> {
    /// Create an Erlang distribution with integer shape `k` and rate `lambda`.
    /// Requires `k ≥ 1` and `lambda > 0`.
    pub fn new(k: u32, lambda: T) -> Result<Self, DistError> {
        if k == 0 {
            return Err(DistError::InvalidParameter);
        }
        let base = Gamma::new(T::from(k).unwrap(), lambda)?;
        Ok(Self { k, base })
    }

    /// Integer shape parameter k.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> T {
        self.base.rate()
    }

    /// Replace the parameters, re-validating them.
    pub fn set_params(&mut self, k: u32, lambda: T) -> Result<(), DistError> {
        *self = Self::new(k, lambda)?;
        Ok(())
    }

    /// Moment-matching estimate `(k̂, λ̂)`: k̂ = round(x̄²/s²), λ̂ = k̂/x̄.
    ///
    /// Requires at least two positive observations with positive sample
    /// variance.
    pub fn mle(sample: &[T]) -> Result<(u32, T), DistError> {
        if sample.len() < 2 {
            return Err(DistError::UnsupportedSample);
        }
        for &x in sample {
            if x <= T::zero() {
                return Err(DistError::UnsupportedSample);
            }
        }
        let (mean, var) = sample_mean_var(sample);
        if var <= T::zero() {
            return Err(DistError::UnsupportedSample);
        }
        let k = match (mean * mean / var).round().to_f64() {
            Some(v) if v >= 1.0 => v as u32,
            _ => 1,
        };
        Ok((k, T::from(k).unwrap() / mean))
    }

    /// Create a distribution from the moment-matching estimate of a sample.
    pub fn from_mle(sample: &[T]) -> Result<Self, DistError> {
        let (k, lambda) = Self::mle(sample)?;
        Self::new(k, lambda)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Erlang<T> {
    fn pdf(&self, x: T) -> T {
        self.base.pdf(x)
    }

    fn ln_pdf(&self, x: T) -> T {
        self.base.ln_pdf(x)
    }

    fn cdf(&self, x: T) -> T {
        self.base.cdf(x)
    }

    fn sf(&self, x: T) -> T {
        self.base.sf(x)
    }

    fn quantile(&self, p: T) -> Result<T, DistError> {
        self.base.quantile(p)
    }

    fn mean(&self) -> T {
        self.base.mean()
    }

    fn variance(&self) -> T {
        self.base.variance()
    }

    fn support(&self) -> (T, T) {
        self.base.support()
    }
}
