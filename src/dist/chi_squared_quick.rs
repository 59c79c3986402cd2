use crate::FloatScalar;
use super::{
    check_prob, normal_quantile_standard, ChiSquared, ContinuousDistribution, DistError,
};

/// Chi-squared distribution with integer degrees of freedom and a fast
/// approximate quantile.
///
/// Density, CDF, and moments are forwarded to the exact [`ChiSquared`]; only
/// the quantile is replaced by closed forms and a Cornish-Fisher expansion,
/// avoiding the Newton refinement of the exact inverse. Central
/// probabilities (0.02 < u < 0.98) use the Cornish-Fisher series through the
/// 1/n² and 1/(n²√n) orders; tails with n ≥ 10 use the same expansion recast
/// around the Wilson-Hilferty cube; tails with small n fall back to the
/// exact inverse. At n = 10 the inverse stays within 1e-5 of the exact CDF
/// over u ∈ [0.005, 0.995], tightening further as n grows.
///
/// # Example
///
/// ```
/// use probdist::dist::{ChiSquaredQuick, ContinuousDistribution};
///
/// let q = ChiSquaredQuick::new(2).unwrap();
/// // Exact median of chi²(2) is 2 ln 2
/// assert!((q.quantile(0.5_f64).unwrap() - 1.386294).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChiSquaredQuick<T> {
    n: u32,
    base: ChiSquared<T>,
}

impl<T: FloatScalar> ChiSquaredQuick<T> {
    /// Create a chi-squared distribution with `n` degrees of freedom.
    /// Requires `n ≥ 1`.
    pub fn new(n: u32) -> Result<Self, DistError> {
        if n == 0 {
            return Err(DistError::InvalidParameter);
        }
        let base = ChiSquared::new(T::from(n).unwrap())?;
        Ok(Self { n, base })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> u32 {
        self.n
    }

    /// Replace the degrees of freedom, re-validating them.
    pub fn set_params(&mut self, n: u32) -> Result<(), DistError> {
        *self = Self::new(n)?;
        Ok(())
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for ChiSquaredQuick<T> {
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

    fn quantile(&self, u: T) -> Result<T, DistError> {
        check_prob(u)?;
        if u == T::zero() {
            return Ok(T::zero());
        }
        if u == T::one() {
            return Ok(T::infinity());
        }

        let one = T::one();
        let two = one + one;
        let nf = T::from(self.n).unwrap();

        // Closed forms for one and two degrees of freedom
        if self.n == 1 {
            let z = normal_quantile_standard((one + u) / two);
            return Ok(z * z);
        }
        if self.n == 2 {
            let floor = T::from(1e-16).unwrap();
            return Ok(-two * (one - u).max(floor).ln());
        }

        let lo = T::from(0.02).unwrap();
        let hi = T::from(0.98).unwrap();
        let z = normal_quantile_standard(u);
        let s = (two * nf).sqrt();
        let z2 = z * z;
        let z3 = z2 * z;
        let z4 = z2 * z2;
        let z5 = z4 * z;
        let z6 = z4 * z2;
        let z7 = z6 * z;

        if u > lo && u < hi {
            // Cornish-Fisher expansion about the normal quantile, carried
            // through the 1/n² and 1/(n²√n) orders
            let x = nf
                + s * z
                + two / T::from(3.0).unwrap() * (z2 - one)
                + (z3 - T::from(7.0).unwrap() * z) / (T::from(9.0).unwrap() * s)
                - (T::from(6.0).unwrap() * z4 + T::from(14.0).unwrap() * z2
                    - T::from(32.0).unwrap())
                    / (T::from(405.0).unwrap() * nf)
                + (T::from(9.0).unwrap() * z5 + T::from(256.0).unwrap() * z3
                    - T::from(433.0).unwrap() * z)
                    / (T::from(4860.0).unwrap() * nf * s)
                + (T::from(12.0).unwrap() * z6 - T::from(243.0).unwrap() * z4
                    - T::from(923.0).unwrap() * z2
                    + T::from(1472.0).unwrap())
                    / (T::from(25515.0).unwrap() * nf * nf)
                - (T::from(3753.0).unwrap() * z7 + T::from(4353.0).unwrap() * z5
                    - T::from(289517.0).unwrap() * z3
                    - T::from(289717.0).unwrap() * z)
                    / (T::from(9185400.0).unwrap() * nf * nf * s);
            return Ok(x.max(T::zero()));
        }

        if self.n >= 10 {
            // The same expansion recast around the Wilson-Hilferty cube: the
            // cube absorbs the leading terms, which cancel badly in the tails
            // when summed directly
            let h = (two / (T::from(9.0).unwrap() * nf)).sqrt();
            let a = one - h * h + h * z;
            let x = nf * a * a * a
                + (T::from(3.0).unwrap() * z - z3) / (T::from(27.0).unwrap() * s)
                - (T::from(6.0).unwrap() * z4 - T::from(46.0).unwrap() * z2
                    + T::from(28.0).unwrap())
                    / (T::from(405.0).unwrap() * nf)
                + (T::from(9.0).unwrap() * z5 + T::from(256.0).unwrap() * z3
                    - T::from(913.0).unwrap() * z)
                    / (T::from(4860.0).unwrap() * nf * s)
                + (T::from(12.0).unwrap() * z6 - T::from(243.0).unwrap() * z4
                    - T::from(923.0).unwrap() * z2
                    + T::from(1752.0).unwrap())
                    / (T::from(25515.0).unwrap() * nf * nf)
                - (T::from(3753.0).unwrap() * z7 + T::from(4353.0).unwrap() * z5
                    - T::from(289517.0).unwrap() * z3
                    - T::from(289717.0).unwrap() * z)
                    / (T::from(9185400.0).unwrap() * nf * nf * s);
            return Ok(x.max(T::zero()));
        }

        // Small n in the tails: the expansions degrade, use the exact inverse
        self.base.quantile(u)
    }

    fn mean(&self) -> T {
        self.base.mean()
    }

    fn variance(&self) -> T {
        self.base.variance()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
