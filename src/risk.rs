// src/risk.rs
//! Summary risk statistics over simulated terminal values
//!
//! All statistics are symmetric functions of the input collection (mean,
//! median, percentile, count-based probabilities), so they are independent of
//! path ordering and of how the simulation was parallelized.

use crate::error::{validation::*, QuantError, QuantResult};

/// Aggregation controls
#[derive(Debug, Clone, Copy)]
pub struct RiskConfig {
    /// VaR confidence level, e.g. 0.95 for the 5th percentile of outcomes
    pub confidence: f64,
    /// Relative drawdown counted as a large loss, e.g. 0.10 for -10%
    pub loss_threshold: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        RiskConfig {
            confidence: 0.95,
            loss_threshold: 0.10,
        }
    }
}

impl RiskConfig {
    pub fn validate(&self) -> QuantResult<()> {
        validate_unit_interval("confidence", self.confidence)?;
        validate_unit_interval("loss_threshold", self.loss_threshold)?;
        Ok(())
    }
}

/// Distributional summary of one simulation run; recomputed each time
#[derive(Debug, Clone, Copy)]
pub struct RiskReport {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    /// Lower (1 - confidence) percentile of terminal values
    pub value_at_risk: f64,
    /// Mean of the tail at or below the VaR percentile (CVaR)
    pub expected_shortfall: f64,
    /// Fraction of paths ending above the initial value
    pub prob_profit: f64,
    /// Fraction of paths ending below v0 * (1 - loss_threshold)
    pub prob_large_loss: f64,
    /// Confidence level the VaR and shortfall were computed at
    pub confidence: f64,
    /// Loss threshold the large-loss probability was computed at
    pub loss_threshold: f64,
}

impl RiskReport {
    /// Aggregate terminal portfolio values against the initial value `v0`
    ///
    /// # Errors
    ///
    /// - `InsufficientData` for an empty collection
    /// - `InvalidParameters` for bad `v0`, non-finite values, or an invalid
    ///   configuration
    pub fn from_terminal_values(values: &[f64], v0: f64, cfg: &RiskConfig) -> QuantResult<Self> {
        cfg.validate()?;
        validate_positive("v0", v0)?;
        if values.is_empty() {
            return Err(QuantError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        for &v in values {
            validate_finite("terminal value", v)?;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() > 1 {
            (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let median = percentile_sorted(&sorted, 0.5);
        let value_at_risk = percentile_sorted(&sorted, 1.0 - cfg.confidence);

        // Tail mean over every outcome at or below the VaR level.
        let tail: Vec<f64> = sorted.iter().copied().filter(|&v| v <= value_at_risk).collect();
        let expected_shortfall = if tail.is_empty() {
            value_at_risk
        } else {
            tail.iter().sum::<f64>() / tail.len() as f64
        };

        let prob_profit = values.iter().filter(|&&v| v > v0).count() as f64 / n;
        let loss_level = v0 * (1.0 - cfg.loss_threshold);
        let prob_large_loss = values.iter().filter(|&&v| v < loss_level).count() as f64 / n;

        Ok(RiskReport {
            mean,
            median,
            std_dev,
            value_at_risk,
            expected_shortfall,
            prob_profit,
            prob_large_loss,
            confidence: cfg.confidence,
            loss_threshold: cfg.loss_threshold,
        })
    }
}

/// Percentile of an ascending-sorted slice, linear interpolation between
/// order statistics. `p` in [0, 1].
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
