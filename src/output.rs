// src/output.rs
//! CSV export surface for reporting and plotting collaborators.
//!
//! The core exposes plain numeric arrays; these writers are thin conveniences
//! and own no file-format contract beyond simple CSV.

use crate::mc::engine::SimulationResult;
use crate::risk::RiskReport;
use std::fs::File;
use std::io::{self, Write};

/// One terminal value per row
pub fn write_terminal_values_to_csv(filename: &str, result: &SimulationResult) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "path_id,terminal_value")?;
    for (i, v) in result.terminal.iter().enumerate() {
        writeln!(file, "{},{}", i, v)?;
    }
    Ok(())
}

/// Full path matrix, one row per path; no-op header-only file when the run
/// did not retain paths
pub fn write_paths_to_csv(filename: &str, result: &SimulationResult) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "path_id,values...")?;
    if let Some(matrix) = &result.paths {
        for (i, row) in matrix.rows().into_iter().enumerate() {
            write!(file, "{}", i)?;
            for v in row.iter() {
                write!(file, ",{}", v)?;
            }
            writeln!(file)?;
        }
    }
    Ok(())
}

/// Key/value summary of a risk report
pub fn write_report_to_csv(filename: &str, report: &RiskReport) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "mean,{}", report.mean)?;
    writeln!(file, "median,{}", report.median)?;
    writeln!(file, "std_dev,{}", report.std_dev)?;
    writeln!(file, "value_at_risk_{},{}", report.confidence, report.value_at_risk)?;
    writeln!(file, "expected_shortfall,{}", report.expected_shortfall)?;
    writeln!(file, "prob_profit,{}", report.prob_profit)?;
    writeln!(file, "prob_large_loss,{}", report.prob_large_loss)?;
    Ok(())
}

/// (spot, payoff) pairs for payoff-diagram plotting
pub fn write_payoff_curve_to_csv(filename: &str, curve: &[(f64, f64)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "spot,payoff")?;
    for (s, payoff) in curve {
        writeln!(file, "{},{}", s, payoff)?;
    }
    Ok(())
}
