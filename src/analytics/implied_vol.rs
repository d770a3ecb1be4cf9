// src/analytics/implied_vol.rs
//! Newton-Raphson implied volatility
//!
//! Inverts the Black-Scholes-Merton price in σ for an observed market price:
//! ```text
//! σ_{n+1} = σ_n - (price(σ_n) - target) / vega(σ_n)
//! ```
//! Vega is the exact derivative of price with respect to σ, so convergence is
//! quadratic near the root; well-behaved inputs finish in 2-6 iterations.
//! Targets outside the no-arbitrage band are rejected up front rather than
//! left to diverge.

use crate::analytics::black_scholes::{OptionContract, OptionKind};
use crate::error::{validation::*, QuantError, QuantResult};

/// Solver controls, teacher defaults: σ₀ = 20% vol, 1e-8 price tolerance
#[derive(Debug, Clone, Copy)]
pub struct IvConfig {
    /// Initial volatility guess
    pub initial_sigma: f64,
    /// Convergence tolerance on |model price - target|
    pub tolerance: f64,
    /// Iteration cap before reporting failure
    pub max_iterations: usize,
    /// Below this vega the Newton step is numerically meaningless
    pub min_vega: f64,
    /// Volatility floor keeping iterates strictly positive
    pub min_sigma: f64,
}

impl Default for IvConfig {
    fn default() -> Self {
        IvConfig {
            initial_sigma: 0.2,
            tolerance: 1e-8,
            max_iterations: 100,
            min_vega: 1e-10,
            min_sigma: 1e-4,
        }
    }
}

/// No-arbitrage price band for a European option
///
/// ```text
/// call: [max(S e^(-qT) - K e^(-rT), 0), S e^(-qT)]
/// put:  [max(K e^(-rT) - S e^(-qT), 0), K e^(-rT)]
/// ```
pub fn arbitrage_bounds(kind: OptionKind, s: f64, k: f64, t: f64, r: f64, q: f64) -> (f64, f64) {
    let fwd_s = s * (-q * t).exp();
    let fwd_k = k * (-r * t).exp();
    match kind {
        OptionKind::Call => ((fwd_s - fwd_k).max(0.0), fwd_s),
        OptionKind::Put => ((fwd_k - fwd_s).max(0.0), fwd_k),
    }
}

/// Solve for the volatility that reproduces `target_price`
///
/// # Errors
///
/// - `InvalidParameters` for bad inputs (t must be strictly positive here,
///   since an expired option carries no volatility information)
/// - `ArbitrageViolation` when the target sits outside the theoretical band
/// - `ConvergenceFailure` on near-zero vega or an exhausted iteration budget
pub fn implied_vol(
    target_price: f64,
    kind: OptionKind,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    q: f64,
    cfg: &IvConfig,
) -> QuantResult<f64> {
    validate_positive("s", s)?;
    validate_positive("k", k)?;
    validate_positive("t", t)?;
    validate_finite("r", r)?;
    validate_non_negative("q", q)?;
    validate_finite("target_price", target_price)?;

    let (lower, upper) = arbitrage_bounds(kind, s, k, t, r, q);
    if target_price < lower - cfg.tolerance || target_price > upper + cfg.tolerance {
        return Err(QuantError::ArbitrageViolation {
            price: target_price,
            lower,
            upper,
        });
    }

    let mut sigma = cfg.initial_sigma;
    let mut last_error = f64::INFINITY;

    for iteration in 0..cfg.max_iterations {
        let contract = OptionContract::new(s, k, t, r, sigma, q)?;
        let price = contract.price(kind);
        let diff = price - target_price;
        last_error = diff.abs();

        if last_error < cfg.tolerance {
            return Ok(sigma);
        }

        let vega = contract.vega()?;
        if vega.abs() < cfg.min_vega {
            return Err(QuantError::ConvergenceFailure {
                method: "Newton-Raphson implied volatility".to_string(),
                iterations: iteration,
                last_error,
            });
        }

        sigma = (sigma - diff / vega).max(cfg.min_sigma);
    }

    Err(QuantError::ConvergenceFailure {
        method: "Newton-Raphson implied volatility".to_string(),
        iterations: cfg.max_iterations,
        last_error,
    })
}
