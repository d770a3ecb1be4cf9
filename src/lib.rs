//! # quant-risk: Option Pricing and Monte Carlo Portfolio Risk
//!
//! A Rust library with two calculators that share one stochastic model of
//! asset prices:
//!
//! - **Closed-form pricing**: Black-Scholes-Merton European option prices,
//!   Greeks, and Newton-Raphson implied volatility.
//! - **Simulation**: Monte Carlo portfolio value paths under Geometric
//!   Brownian Motion, aggregated into risk statistics (VaR, expected
//!   shortfall, profit probability).
//!
//! ## Key Features
//!
//! - **Complete Greeks**: Delta, Gamma, Vega, Theta, Rho with dividend yield
//! - **Implied Volatility**: Newton-Raphson with no-arbitrage bound checks
//! - **Parameter Estimation**: annualized drift and volatility from
//!   historical price series
//! - **Reproducible Simulation**: seeded per-path RNG streams, parallel with
//!   Rayon, bit-identical to the sequential run
//! - **Robust Numerics**: parameter validation and explicit error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use quant_risk::analytics::black_scholes::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, 0.2, 0.02)
//!     .expect("valid parameters");
//! let call = contract.price(OptionKind::Call);
//! let greeks = contract.greeks(OptionKind::Call).expect("t > 0");
//! println!("call = {:.4}, delta = {:.4}", call, greeks.delta);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Both calculators assume the underlying follows Geometric Brownian Motion,
//! `dV_t = mu V_t dt + sigma V_t dW_t`. The pricer evaluates the closed-form
//! risk-neutral expectation; the simulator draws sample paths with the exact
//! log-normal step and aggregates their terminal values.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod analytics;
pub mod mc;
pub mod risk;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{QuantError, QuantResult};
