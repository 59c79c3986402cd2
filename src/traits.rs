use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for scalar values used throughout the crate.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point scalars (`f32`, `f64`).
///
/// Required by every distribution and special function: evaluation needs
/// `exp`, `ln`, `sqrt`, ordered comparisons, and conversion from literal
/// approximation coefficients.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
