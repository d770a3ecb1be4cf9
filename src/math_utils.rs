// src/math_utils.rs
//! Standard normal distribution utilities shared by the pricer and solver.

use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function
///
/// # Formula
/// ```text
/// Φ(x) = 0.5 * (1 + erf(x/√2))
/// ```
///
/// Tends to 0 and 1 at the extremes without overflow.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}
