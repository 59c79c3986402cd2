//! Scalar root finding.
//!
//! All algorithms are no-alloc compatible and require the
//! [`crate::FloatScalar`] bound (real-valued only). The bracketing solver here is the workhorse
//! behind the likelihood-equation MLE estimators in [`crate::dist`].
//!
//! - [`brent`] — Brent's method (bisection + secant + inverse quadratic
//!   interpolation) on a sign-changing bracket

mod root;


pub use root::{brent, RootSettings};

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimError {
    /// Maximum number of iterations exceeded.
    MaxIterations,
    /// Bracket endpoints do not have opposite signs.
    BracketInvalid,
}

impl core::fmt::Display for OptimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptimError::MaxIterations => write!(f, "maximum iterations exceeded"),
            OptimError::BracketInvalid => write!(f, "bracket endpoints must have opposite signs"),
        }
    }
}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}
