// src/models/gbm.rs
//! Geometric Brownian Motion process
//!
//! The shared stochastic model behind both the closed-form pricer and the
//! Monte Carlo simulator:
//! ```text
//! dV_t = μ V_t dt + σ V_t dW_t
//! ```
//! with the exact solution `V_T = V_0 exp((μ - σ²/2)T + σ W_T)`.

use crate::error::{validation::*, QuantResult};

/// Annualized GBM drift and volatility
///
/// `mu` is the exponential growth rate of the expected value:
/// `E[V_T] = V_0 e^(μT)`. See `models::estimate` for how it is derived from
/// historical returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmParams {
    pub mu: f64,
    pub sigma: f64,
}

impl GbmParams {
    pub fn new(mu: f64, sigma: f64) -> QuantResult<Self> {
        validate_finite("mu", mu)?;
        validate_positive("sigma", sigma)?;
        Ok(GbmParams { mu, sigma })
    }
}

/// GBM process with a fixed parameter set
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    pub params: GbmParams,
}

impl Gbm {
    pub fn new(params: GbmParams) -> Self {
        Gbm { params }
    }

    /// Advance one step with the exact log-normal increment
    ///
    /// ```text
    /// V_{t+Δt} = V_t * exp((μ - σ²/2)Δt + σ√Δt * Z)
    /// ```
    /// where `normal_draw` is Z ~ N(0,1). Exact in distribution for any Δt,
    /// unlike an Euler-Maruyama step.
    pub fn exact_step(&self, v_t: f64, dt: f64, normal_draw: f64) -> f64 {
        let GbmParams { mu, sigma } = self.params;
        v_t * ((mu - 0.5 * sigma * sigma) * dt + sigma * dt.sqrt() * normal_draw).exp()
    }

    /// Expected value at horizon `t`
    pub fn expected_value(&self, v0: f64, t: f64) -> f64 {
        v0 * (self.params.mu * t).exp()
    }
}
