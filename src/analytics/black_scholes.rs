// src/analytics/black_scholes.rs
//! Analytical Black-Scholes-Merton formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model with continuous dividend yield q, the
//! underlying follows:
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options this has closed-form solutions involving the
//! cumulative normal distribution function Φ(x).

use crate::error::{validation::*, QuantError, QuantResult};
use crate::math_utils::{norm_cdf, norm_pdf};

/// Below this time to expiry the formula's removable singularity is
/// special-cased and the price collapses to the intrinsic payoff.
const EXPIRY_EPS: f64 = 1e-12;

/// Call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Call,
    Put,
}

/// Option price sensitivities, computed on demand from the contract
///
/// Conventions: `vega` is per unit of volatility (divide by 100 for a 1% vol
/// move), `theta` is annualized (divide by 365 for daily decay), `rho` is per
/// 1% rate move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Immutable European option parameter bundle
///
/// Every pricing call is a pure function of these fields; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    /// Spot price
    pub s: f64,
    /// Strike price
    pub k: f64,
    /// Time to expiry in years
    pub t: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Volatility
    pub sigma: f64,
    /// Continuous dividend yield
    pub q: f64,
}

impl OptionContract {
    /// Construct a validated contract
    ///
    /// # Errors
    ///
    /// `InvalidParameters` when s, k or sigma is not positive, t or q is
    /// negative, or r is not finite.
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64, q: f64) -> QuantResult<Self> {
        validate_positive("s", s)?;
        validate_positive("k", k)?;
        validate_non_negative("t", t)?;
        validate_finite("r", r)?;
        validate_positive("sigma", sigma)?;
        validate_non_negative("q", q)?;
        Ok(OptionContract { s, k, t, r, sigma, q })
    }

    /// Dividend-free contract
    pub fn without_dividend(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> QuantResult<Self> {
        Self::new(s, k, t, r, sigma, 0.0)
    }

    /// `d₁ = [ln(S/K) + (r - q + σ²/2)T] / (σ√T)` and `d₂ = d₁ - σ√T`
    ///
    /// Undefined at T = 0; callers special-case expiry first.
    fn d1_d2(&self) -> (f64, f64) {
        let sqrt_t = self.t.sqrt();
        let d1 = ((self.s / self.k).ln() + (self.r - self.q + 0.5 * self.sigma * self.sigma) * self.t)
            / (self.sigma * sqrt_t);
        (d1, d1 - self.sigma * sqrt_t)
    }

    /// Intrinsic payoff at expiry
    pub fn intrinsic(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => (self.s - self.k).max(0.0),
            OptionKind::Put => (self.k - self.s).max(0.0),
        }
    }

    /// Black-Scholes-Merton price
    ///
    /// # Formula
    /// ```text
    /// C = S e^(-qT) Φ(d₁) - K e^(-rT) Φ(d₂)
    /// P = K e^(-rT) Φ(-d₂) - S e^(-qT) Φ(-d₁)
    /// ```
    ///
    /// At T = 0 the price is the intrinsic payoff (removable singularity).
    pub fn price(&self, kind: OptionKind) -> f64 {
        if self.t < EXPIRY_EPS {
            return self.intrinsic(kind);
        }
        let (d1, d2) = self.d1_d2();
        let disc_r = (-self.r * self.t).exp();
        let disc_q = (-self.q * self.t).exp();
        match kind {
            OptionKind::Call => self.s * disc_q * norm_cdf(d1) - self.k * disc_r * norm_cdf(d2),
            OptionKind::Put => self.k * disc_r * norm_cdf(-d2) - self.s * disc_q * norm_cdf(-d1),
        }
    }

    /// Raw vega, `∂V/∂σ = S e^(-qT) φ(d₁) √T` (same for calls and puts)
    ///
    /// Kept unscaled because the implied-volatility Newton step needs the
    /// true derivative; `Greeks::vega` carries the same value.
    pub fn vega(&self) -> QuantResult<f64> {
        validate_positive("t", self.t)?;
        let (d1, _) = self.d1_d2();
        Ok(self.s * (-self.q * self.t).exp() * norm_pdf(d1) * self.t.sqrt())
    }

    /// All five Greeks for the given side
    ///
    /// # Errors
    ///
    /// `InvalidParameters` at T = 0, where the sensitivities are not defined.
    pub fn greeks(&self, kind: OptionKind) -> QuantResult<Greeks> {
        validate_positive("t", self.t)?;
        let (d1, d2) = self.d1_d2();
        let sqrt_t = self.t.sqrt();
        let disc_r = (-self.r * self.t).exp();
        let disc_q = (-self.q * self.t).exp();
        let pdf_d1 = norm_pdf(d1);

        let gamma = disc_q * pdf_d1 / (self.s * self.sigma * sqrt_t);
        let vega = self.s * disc_q * pdf_d1 * sqrt_t;
        // Shared time-decay term from the diffusion
        let theta_diffusion = -self.s * disc_q * pdf_d1 * self.sigma / (2.0 * sqrt_t);

        let (delta, theta, rho) = match kind {
            OptionKind::Call => (
                disc_q * norm_cdf(d1),
                theta_diffusion - self.r * self.k * disc_r * norm_cdf(d2)
                    + self.q * self.s * disc_q * norm_cdf(d1),
                self.k * self.t * disc_r * norm_cdf(d2) / 100.0,
            ),
            OptionKind::Put => (
                disc_q * (norm_cdf(d1) - 1.0),
                theta_diffusion + self.r * self.k * disc_r * norm_cdf(-d2)
                    - self.q * self.s * disc_q * norm_cdf(-d1),
                -self.k * self.t * disc_r * norm_cdf(-d2) / 100.0,
            ),
        };

        Ok(Greeks {
            delta,
            gamma,
            vega,
            theta,
            rho,
        })
    }

    /// Signed deviation from put-call parity
    ///
    /// ```text
    /// gap = C - P - (S e^(-qT) - K e^(-rT))
    /// ```
    pub fn parity_gap(&self) -> f64 {
        let forward = self.s * (-self.q * self.t).exp() - self.k * (-self.r * self.t).exp();
        self.price(OptionKind::Call) - self.price(OptionKind::Put) - forward
    }

    /// Self-consistency assertion: errors when parity is violated beyond `tol`
    pub fn check_put_call_parity(&self, tol: f64) -> QuantResult<()> {
        let gap = self.parity_gap();
        if gap.abs() > tol {
            return Err(QuantError::NumericalInstability {
                method: "put-call parity check".to_string(),
                reason: format!("|C - P - (S e^(-qT) - K e^(-rT))| = {:.3e} > {:.3e}", gap.abs(), tol),
            });
        }
        Ok(())
    }
}

/// Intrinsic payoff sampled over a range of spot prices
///
/// Raw (S, payoff) pairs for the plotting collaborator.
pub fn payoff_curve(kind: OptionKind, k: f64, spots: &[f64]) -> Vec<(f64, f64)> {
    spots
        .iter()
        .map(|&s| {
            let payoff = match kind {
                OptionKind::Call => (s - k).max(0.0),
                OptionKind::Put => (k - s).max(0.0),
            };
            (s, payoff)
        })
        .collect()
}
