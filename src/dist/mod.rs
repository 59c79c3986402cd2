//! Probability distributions: continuous and discrete.
//!
//! Each distribution provides [`ContinuousDistribution`] or
//! [`DiscreteDistribution`] trait implementations for a consistent API across
//! all families: density/mass, CDF, complementary CDF, quantile, moments, and
//! support. Families additionally offer `mle`/`from_mle` associated functions
//! for maximum-likelihood estimation where an estimator is defined.
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Uniform`] | lower a, upper b | [a, b] |
//! | [`Exponential`] | rate λ | [0, ∞) |
//! | [`Gamma`] | shape α, rate β | (0, ∞) |
//! | [`Beta`] | shape α, shape β | [0, 1] |
//! | [`ChiSquared`] | degrees of freedom n | [0, ∞) |
//! | [`ChiSquaredQuick`] | degrees of freedom n (integer) | [0, ∞) |
//! | [`Chi`] | degrees of freedom ν (integer) | [0, ∞) |
//! | [`Erlang`] | shape k (integer), rate λ | [0, ∞) |
//! | [`StudentT`] | degrees of freedom ν | (−∞, ∞) |
//! | [`StudentTQuick`] | degrees of freedom n (integer) | (−∞, ∞) |
//! | [`FisherF`] | degrees of freedom n1, n2 | [0, ∞) |
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Bernoulli`] | probability p | {0, 1} |
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//! | [`Geometric`] | probability p | {0, 1, 2, …} |
//! | [`NegativeBinomial`] | successes r, probability p | {0, 1, 2, …} |
//! | [`Pascal`] | successes n (integer), probability p | {0, 1, 2, …} |
//! | [`Logarithmic`] | shape θ | {1, 2, 3, …} |
//! | [`UniformInt`] | lower i, upper j | {i, …, j} |
//!
//! # Example
//!
//! ```
//! use probdist::dist::{Normal, ContinuousDistribution};
//!
//! let n = Normal::new(0.0_f64, 1.0).unwrap();
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
//! assert!((n.cdf(0.0) + n.sf(0.0) - 1.0).abs() < 1e-14);
//! ```

mod bernoulli;
mod beta_dist;
mod binomial;
mod chi;
mod chi_squared;
mod chi_squared_quick;
mod erlang;
mod exponential;
mod fisher_f;
mod gamma_dist;
mod geometric;
mod logarithmic;
mod neg_binomial;
mod normal;
mod pascal;
mod poisson;
mod student_t;
mod student_t_quick;
mod uniform;
mod uniform_int;

#[cfg(test)]
mod tests;

pub use bernoulli::Bernoulli;
pub use beta_dist::Beta;
pub use binomial::Binomial;
pub use chi::Chi;
pub use chi_squared::ChiSquared;
pub use chi_squared_quick::ChiSquaredQuick;
pub use erlang::Erlang;
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma_dist::Gamma;
pub use geometric::Geometric;
pub use logarithmic::Logarithmic;
pub use neg_binomial::NegativeBinomial;
pub use normal::Normal;
pub use pascal::Pascal;
pub use poisson::Poisson;
pub use student_t::StudentT;
pub use student_t_quick::StudentTQuick;
pub use uniform::Uniform;
pub use uniform_int::UniformInt;

use crate::traits::FloatScalar;

/// Errors from distribution construction, evaluation, and estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistError {
    /// A distribution parameter is out of its valid range.
    InvalidParameter,
    /// An evaluation input is out of its valid range (e.g. `p ∉ [0, 1]`
    /// passed to a quantile function).
    InvalidArgument,
    /// An estimator precondition on the sample failed: too few observations,
    /// values outside the distribution's support, or a violated moment
    /// relation (e.g. mean ≥ variance for a negative-binomial fit).
    UnsupportedSample,
}

impl core::fmt::Display for DistError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DistError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
            DistError::InvalidArgument => {
                write!(f, "evaluation input out of valid range")
            }
            DistError::UnsupportedSample => {
                write!(f, "sample does not satisfy estimator preconditions")
            }
        }
    }
}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Complementary CDF P(X ≥ x).
    fn sf(&self, x: T) -> T {
        T::one() - self.cdf(x)
    }
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    ///
    /// Fails with [`DistError::InvalidArgument`] for `p ∉ [0, 1]`. The
    /// boundaries `p = 0` and `p = 1` return the exact support endpoints
    /// (possibly ±∞) without entering any approximation.
    fn quantile(&self, p: T) -> Result<T, DistError>;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
    /// Standard deviation √Var(X).
    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }
    /// Support interval \[a, b\], possibly unbounded.
    fn support(&self) -> (T, T);
}

/// Trait for discrete integer probability distributions.
pub trait DiscreteDistribution<T: FloatScalar> {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: i64) -> T;
    /// Natural log of the probability mass function.
    fn ln_pmf(&self, k: i64) -> T;
    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: i64) -> T;
    /// Complementary CDF P(X ≥ k).
    fn sf(&self, k: i64) -> T {
        T::one() - self.cdf(k - 1)
    }
    /// Quantile function: smallest k such that P(X ≤ k) ≥ p.
    ///
    /// Fails with [`DistError::InvalidArgument`] for `p ∉ [0, 1]`.
    fn quantile(&self, p: T) -> Result<i64, DistError>;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
    /// Standard deviation √Var(X).
    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }
    /// Support interval \[a, b\] (`i64::MAX` for an unbounded upper end).
    fn support(&self) -> (i64, i64);
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Validate a probability argument for quantile functions.
pub(crate) fn check_prob<T: FloatScalar>(p: T) -> Result<(), DistError> {
    if p.is_nan() || p < T::zero() || p > T::one() {
        Err(DistError::InvalidArgument)
    } else {
        Ok(())
    }
}

/// Standard normal quantile via Acklam's rational approximation.
/// Relative error < 1.15e-9. Input: p ∈ (0, 1).
pub(crate) fn normal_quantile_standard<T: FloatScalar>(p: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();

    let p_low = T::from(0.02425).unwrap();
    let p_high = one - p_low;

    // Coefficients — central region
    let a1 = T::from(-3.969683028665376e+01).unwrap();
    let a2 = T::from(2.209460984245205e+02).unwrap();
    let a3 = T::from(-2.759285104469687e+02).unwrap();
    let a4 = T::from(1.383577518672690e+02).unwrap();
    let a5 = T::from(-3.066479806614716e+01).unwrap();
    let a6 = T::from(2.506628277459239e+00).unwrap();

    let b1 = T::from(-5.447609879822406e+01).unwrap();
    let b2 = T::from(1.615858368580409e+02).unwrap();
    let b3 = T::from(-1.556989798598866e+02).unwrap();
    let b4 = T::from(6.680131188771972e+01).unwrap();
    let b5 = T::from(-1.328068155288572e+01).unwrap();

    // Coefficients — tail regions
    let c1 = T::from(-7.784894002430293e-03).unwrap();
    let c2 = T::from(-3.223964580411365e-01).unwrap();
    let c3 = T::from(-2.400758277161838e+00).unwrap();
    let c4 = T::from(-2.549732539343734e+00).unwrap();
    let c5 = T::from(4.374664141464968e+00).unwrap();
    let c6 = T::from(2.938163982698783e+00).unwrap();

    let d1 = T::from(7.784695709041462e-03).unwrap();
    let d2 = T::from(3.224671290700398e-01).unwrap();
    let d3 = T::from(2.445134137142996e+00).unwrap();
    let d4 = T::from(3.754408661907416e+00).unwrap();

    if p < p_low {
        // Lower tail
        let q = (-two * p.ln()).sqrt();
        (((((c1 * q + c2) * q + c3) * q + c4) * q + c5) * q + c6)
            / ((((d1 * q + d2) * q + d3) * q + d4) * q + one)
    } else if p <= p_high {
        // Central region
        let q = p - half;
        let r = q * q;
        (((((a1 * r + a2) * r + a3) * r + a4) * r + a5) * r + a6) * q
            / (((((b1 * r + b2) * r + b3) * r + b4) * r + b5) * r + one)
    } else {
        // Upper tail — symmetry
        let q = (-two * (one - p).ln()).sqrt();
        -(((((c1 * q + c2) * q + c3) * q + c4) * q + c5) * q + c6)
            / ((((d1 * q + d2) * q + d3) * q + d4) * q + one)
    }
}

/// Newton-Raphson with bisection fallback for quantile computation.
pub(crate) fn quantile_newton<T: FloatScalar>(
    cdf_fn: impl Fn(T) -> T,
    pdf_fn: impl Fn(T) -> T,
    p: T,
    x0: T,
    mut lo: T,
    mut hi: T,
) -> T {
    if p <= T::zero() {
        return lo;
    }
    if p >= T::one() {
        return hi;
    }

    let two = T::one() + T::one();
    let tol = T::epsilon() * T::from(1000.0).unwrap();
    let mut x = x0.max(lo).min(hi);

    for _ in 0..100 {
        let f = cdf_fn(x) - p;
        if f.abs() < tol {
            return x;
        }
        if f < T::zero() {
            lo = x;
        } else {
            hi = x;
        }
        let fprime = pdf_fn(x);
        if fprime > T::epsilon() {
            let x_new = x - f / fprime;
            if x_new > lo && x_new < hi {
                x = x_new;
            } else {
                x = (lo + hi) / two;
            }
        } else {
            x = (lo + hi) / two;
        }
    }
    x
}

/// Linear search for a discrete quantile: walk `k` upward from `start`,
/// accumulating masses produced by `next_term`, until the running CDF
/// reaches `p`. `next_term(k, term)` returns the mass at `k + 1` given the
/// mass at `k`; recurrence ratios keep the scan free of special-function
/// calls per step.
pub(crate) fn discrete_quantile_scan<T: FloatScalar>(
    p: T,
    start: i64,
    first_term: T,
    mut next_term: impl FnMut(i64, T) -> T,
) -> i64 {
    // Generous safety cap: the scan terminates mathematically because the
    // masses sum to 1, but a pathological p very close to 1 combined with
    // rounding could otherwise loop on denormal terms.
    const MAX_SCAN: i64 = 10_000_000;

    let mut k = start;
    let mut term = first_term;
    let mut cum = term;
    while cum < p && k - start < MAX_SCAN {
        term = next_term(k, term);
        k += 1;
        cum = cum + term;
    }
    if k - start >= MAX_SCAN {
        log::warn!("discrete quantile scan hit iteration cap; returning best candidate");
    }
    k
}

/// Sample mean of a float slice.
pub(crate) fn sample_mean<T: FloatScalar>(sample: &[T]) -> T {
    let mut sum = T::zero();
    for &x in sample {
        sum = sum + x;
    }
    sum / T::from(sample.len()).unwrap()
}

/// Sample mean and (biased, 1/m) variance.
pub(crate) fn sample_mean_var<T: FloatScalar>(sample: &[T]) -> (T, T) {
    let mean = sample_mean(sample);
    let mut ss = T::zero();
    for &x in sample {
        let d = x - mean;
        ss = ss + d * d;
    }
    (mean, ss / T::from(sample.len()).unwrap())
}
