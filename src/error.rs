// src/error.rs
use std::fmt;

/// Custom error types for the quant-risk library
#[derive(Debug, Clone)]
pub enum QuantError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Root-finding failed to converge
    ConvergenceFailure {
        method: String,
        iterations: usize,
        last_error: f64,
    },

    /// Target option price outside no-arbitrage bounds
    ArbitrageViolation {
        price: f64,
        lower: f64,
        upper: f64,
    },

    /// Not enough observations for estimation
    InsufficientData { required: usize, actual: usize },

    /// Numerical instability during computation
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for QuantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            QuantError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            QuantError::ConvergenceFailure {
                method,
                iterations,
                last_error,
            } => {
                write!(
                    f,
                    "{} failed to converge after {} iterations (last price error: {:.6e})",
                    method, iterations, last_error
                )
            }
            QuantError::ArbitrageViolation { price, lower, upper } => {
                write!(
                    f,
                    "Target price {} violates no-arbitrage bounds [{:.6}, {:.6}]",
                    price, lower, upper
                )
            }
            QuantError::InsufficientData { required, actual } => {
                write!(
                    f,
                    "Insufficient data: {} observations required, got {}",
                    required, actual
                )
            }
            QuantError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for QuantError {}

/// Result type alias for quant-risk operations
pub type QuantResult<T> = Result<T, QuantError>;

/// Validation utilities
pub mod validation {
    use super::{QuantError, QuantResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> QuantResult<()> {
        if !(value > 0.0) {
            Err(QuantError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> QuantResult<()> {
        if !(value >= 0.0) {
            Err(QuantError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (>= 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> QuantResult<()> {
        if !value.is_finite() {
            Err(QuantError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is strictly inside the unit interval
    pub fn validate_unit_interval(name: &str, value: f64) -> QuantResult<()> {
        if !(value > 0.0 && value < 1.0) {
            Err(QuantError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be in the open interval (0, 1)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate simulation path count
    pub fn validate_paths(paths: usize) -> QuantResult<()> {
        if paths == 0 {
            Err(QuantError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(QuantError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate time-step count
    pub fn validate_steps(steps: usize) -> QuantResult<()> {
        if steps == 0 {
            Err(QuantError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 100_000 {
            Err(QuantError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
