// src/models/estimate.rs
//! GBM parameter estimation from historical prices
//!
//! # Drift Convention
//!
//! Log returns `r_i = ln(P_i / P_{i-1})` estimate the *log* drift
//! `μ - σ²/2` of the GBM process. This module reports
//! ```text
//! μ = mean(r_i) * periods_per_year + σ²/2
//! σ = stdev(r_i) * √periods_per_year
//! ```
//! so that `μ` is the exponential growth rate of the expected value,
//! `E[V_T] = V_0 e^(μT)`. The simulator subtracts the same σ²/2 back out in
//! its step, which keeps the convention consistent across both calculators.

use crate::error::{QuantError, QuantResult};
use crate::models::gbm::GbmParams;
use chrono::NaiveDate;

/// Trading periods per year for daily observations
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// One dated observation from the historical price collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        PricePoint { date, price }
    }
}

/// Estimates annualized GBM drift and volatility from a price series
///
/// The last estimate is cached on the instance and reused by callers (e.g.
/// to feed the simulator) until `estimate` is invoked again.
#[derive(Debug, Clone)]
pub struct GbmEstimator {
    periods_per_year: f64,
    params: Option<GbmParams>,
}

impl GbmEstimator {
    /// `periods_per_year` annualizes the observation frequency
    /// (252 for daily closes, 12 for monthly).
    pub fn new(periods_per_year: f64) -> QuantResult<Self> {
        crate::error::validation::validate_positive("periods_per_year", periods_per_year)?;
        Ok(GbmEstimator {
            periods_per_year,
            params: None,
        })
    }

    /// Daily-close estimator with the standard 252-period annualization
    pub fn daily() -> Self {
        GbmEstimator {
            periods_per_year: TRADING_DAYS_PER_YEAR,
            params: None,
        }
    }

    /// Cached parameters from the most recent `estimate` call
    pub fn params(&self) -> Option<GbmParams> {
        self.params
    }

    /// Estimate (μ, σ) from a chronologically ordered price series
    ///
    /// # Errors
    ///
    /// - `InsufficientData` with fewer than 2 prices (no returns to compute)
    /// - `InvalidParameters` for non-positive prices (log return undefined)
    /// - `NumericalInstability` when the series has zero variance
    pub fn estimate(&mut self, prices: &[f64]) -> QuantResult<GbmParams> {
        if prices.len() < 2 {
            return Err(QuantError::InsufficientData {
                required: 2,
                actual: prices.len(),
            });
        }
        for &p in prices {
            crate::error::validation::validate_positive("price", p)?;
        }

        let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;

        // Sample variance (ddof = 1); a single return has no spread to measure.
        if returns.len() < 2 {
            return Err(QuantError::InsufficientData {
                required: 3,
                actual: prices.len(),
            });
        }
        let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
        if var <= 0.0 {
            return Err(QuantError::NumericalInstability {
                method: "GBM estimation".to_string(),
                reason: "price series has zero variance".to_string(),
            });
        }

        let sigma = var.sqrt() * self.periods_per_year.sqrt();
        let mu = mean * self.periods_per_year + 0.5 * sigma * sigma;

        let params = GbmParams::new(mu, sigma)?;
        self.params = Some(params);
        Ok(params)
    }

    /// Estimate from dated observations, using only the price column
    pub fn estimate_series(&mut self, points: &[PricePoint]) -> QuantResult<GbmParams> {
        let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
        self.estimate(&prices)
    }
}
