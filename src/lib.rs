//! # probdist
//!
//! Univariate probability distributions in pure Rust, no-std compatible.
//! Each distribution family exposes its density (or mass) function, CDF,
//! complementary CDF, inverse CDF (quantile), descriptive moments, and
//! maximum-likelihood parameter estimation from sample data.
//!
//! ## Quick start
//!
//! ```
//! use probdist::dist::{ChiSquared, ContinuousDistribution};
//!
//! let chi2 = ChiSquared::new(5.0_f64).unwrap();
//! assert!((chi2.mean() - 5.0).abs() < 1e-14);
//! let q = chi2.quantile(0.95).unwrap();
//! assert!((chi2.cdf(q) - 0.95).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`dist`] — the distribution families. Continuous: Normal, Uniform,
//!   Exponential, Gamma, Beta, ChiSquared, ChiSquaredQuick, Chi, Erlang,
//!   StudentT, StudentTQuick, FisherF. Discrete: Bernoulli, Binomial,
//!   Poisson, Geometric, NegativeBinomial, Pascal, Logarithmic, UniformInt.
//!   Families without a closed-form CDF either delegate to a base family
//!   through an argument transform (Chi → Gamma, Erlang → Gamma,
//!   FisherF → Beta, Pascal → NegativeBinomial) or switch between series,
//!   rational, and asymptotic approximations by parameter regime
//!   (the `*Quick` variants).
//!
//! - [`special`] — special functions backing the distributions: gamma,
//!   log-gamma, beta, log-beta, regularized incomplete gamma and beta,
//!   error functions.
//!
//! - [`optim`] — bracketing scalar root finding (Brent's method), used by
//!   the likelihood-equation MLE estimators.
//!
//! - [`traits`] — the [`FloatScalar`] element trait (`f32`/`f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod dist;
pub mod optim;
pub mod special;
pub mod traits;

pub use dist::{
    Bernoulli, Beta, Binomial, Chi, ChiSquared, ChiSquaredQuick,
    ContinuousDistribution, DiscreteDistribution, DistError, Erlang,
    Exponential, FisherF, Gamma, Geometric, Logarithmic, NegativeBinomial,
    Normal, Pascal, Poisson, StudentT, StudentTQuick, Uniform, UniformInt,
};
pub use traits::{FloatScalar, Scalar};
