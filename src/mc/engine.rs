// src/mc/engine.rs
//! Monte Carlo portfolio projection under Geometric Brownian Motion
//!
//! # Math Framework
//!
//! Each path applies the exact GBM solution step by step:
//! ```text
//! V_{t+Δt} = V_t * exp((μ - σ²/2)Δt + σ√Δt * Z)
//! ```
//! with Δt = T/steps and Z ~ N(0,1) drawn independently per step per path.
//!
//! # Parallelism
//!
//! Paths are statistically independent, so they run under Rayon. Every path
//! seeds its own generator from `seed + path_id`, which makes the parallel
//! run bit-identical to a sequential one regardless of thread count.

use crate::error::{validation::*, QuantError, QuantResult};
use crate::models::gbm::{Gbm, GbmParams};
use crate::rng::{self, RngFactory};
use ndarray::Array2;
use rayon::prelude::*;

/// Simulation inputs
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Initial portfolio value
    pub v0: f64,
    /// Annualized drift
    pub mu: f64,
    /// Annualized volatility
    pub sigma: f64,
    /// Horizon in years
    pub t: f64,
    /// Time steps per path
    pub steps: usize,
    /// Independent simulation paths
    pub paths: usize,
    /// RNG seed; same seed reproduces the same result exactly
    pub seed: u64,
    /// Retain the full path matrix, not just terminal values
    pub keep_paths: bool,
}

impl SimConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> QuantResult<()> {
        validate_paths(self.paths)?;
        validate_steps(self.steps)?;
        validate_positive("v0", self.v0)?;
        validate_finite("mu", self.mu)?;
        validate_positive("sigma", self.sigma)?;
        validate_positive("t", self.t)?;
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            v0: 10_000.0,
            mu: 0.08,
            sigma: 0.2,
            t: 1.0,
            steps: 252,
            paths: 10_000,
            seed: 12345,
            keep_paths: false,
        }
    }
}

/// Output of one simulation run; read-only after creation
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Terminal portfolio value per path, length = `paths`
    pub terminal: Vec<f64>,
    /// Full history (paths x steps+1) when `keep_paths` was requested
    pub paths: Option<Array2<f64>>,
}

impl SimulationResult {
    pub fn num_paths(&self) -> usize {
        self.terminal.len()
    }
}

/// Run the GBM Monte Carlo simulation
///
/// # Returns
///
/// Terminal values for every path, plus the full path matrix when
/// `cfg.keep_paths` is set. Row i of the matrix is path i, column j the value
/// after j steps (column 0 is `v0`).
///
/// # Errors
///
/// - `InvalidParameters` / `InvalidConfiguration` from validation
/// - `NumericalInstability` if any simulated value is non-finite
pub fn simulate(cfg: &SimConfig) -> QuantResult<SimulationResult> {
    cfg.validate()?;
    let gbm = Gbm::new(GbmParams::new(cfg.mu, cfg.sigma)?);
    let dt = cfg.t / cfg.steps as f64;
    let factory = RngFactory::new(cfg.seed);

    let result = if cfg.keep_paths {
        // Flat row-major buffer keeps the parallel map allocation-friendly.
        let rows: Vec<Vec<f64>> = (0..cfg.paths)
            .into_par_iter()
            .map(|i| {
                let mut rng = factory.rng_for_path(i as u64);
                let mut row = Vec::with_capacity(cfg.steps + 1);
                let mut v = cfg.v0;
                row.push(v);
                for _ in 0..cfg.steps {
                    let z = rng::get_normal_draw(&mut rng);
                    v = gbm.exact_step(v, dt, z);
                    row.push(v);
                }
                row
            })
            .collect();

        let terminal: Vec<f64> = rows.iter().map(|row| row[cfg.steps]).collect();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let matrix = Array2::from_shape_vec((cfg.paths, cfg.steps + 1), flat).map_err(|e| {
            QuantError::NumericalInstability {
                method: "GBM Monte Carlo".to_string(),
                reason: format!("path matrix assembly failed: {}", e),
            }
        })?;

        SimulationResult {
            terminal,
            paths: Some(matrix),
        }
    } else {
        let terminal: Vec<f64> = (0..cfg.paths)
            .into_par_iter()
            .map(|i| {
                let mut rng = factory.rng_for_path(i as u64);
                let mut v = cfg.v0;
                for _ in 0..cfg.steps {
                    let z = rng::get_normal_draw(&mut rng);
                    v = gbm.exact_step(v, dt, z);
                }
                v
            })
            .collect();

        SimulationResult {
            terminal,
            paths: None,
        }
    };

    if let Some(bad) = result.terminal.iter().find(|v| !v.is_finite()) {
        return Err(QuantError::NumericalInstability {
            method: "GBM Monte Carlo".to_string(),
            reason: format!("terminal value is not finite: {}", bad),
        });
    }

    Ok(result)
}
