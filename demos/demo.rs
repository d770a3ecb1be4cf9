// demos/demo.rs
//! End-to-end walkthrough: price history -> GBM parameters -> simulation ->
//! risk report, plus closed-form pricing and implied volatility.
//!
//! Run with: cargo run --example demo

use quant_risk::analytics::black_scholes::{OptionContract, OptionKind};
use quant_risk::analytics::implied_vol::{implied_vol, IvConfig};
use quant_risk::mc::engine::{simulate, SimConfig};
use quant_risk::models::estimate::GbmEstimator;
use quant_risk::models::gbm::{Gbm, GbmParams};
use quant_risk::risk::{RiskConfig, RiskReport};
use quant_risk::rng::{get_normal_draw, seed_rng_from_u64};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Black-Scholes Pricing ===");
    let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, 0.2, 0.02)?;
    let call = contract.price(OptionKind::Call);
    let put = contract.price(OptionKind::Put);
    let greeks = contract.greeks(OptionKind::Call)?;

    println!("Call: {:.4}  Put: {:.4}", call, put);
    println!(
        "Delta: {:.4}  Gamma: {:.4}  Vega: {:.4}  Theta: {:.4}  Rho: {:.4}",
        greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho
    );
    contract.check_put_call_parity(1e-6)?;
    println!("Put-call parity holds (gap = {:.2e})", contract.parity_gap());

    println!("\n=== Implied Volatility ===");
    let iv = implied_vol(call, OptionKind::Call, 100.0, 105.0, 1.0, 0.05, 0.02, &IvConfig::default())?;
    println!("Recovered sigma from call price: {:.6}", iv);

    println!("\n=== GBM Estimation from Synthetic History ===");
    // Stand-in for the market-data collaborator: two years of daily closes.
    let gbm = Gbm::new(GbmParams::new(0.12, 0.18)?);
    let mut rng = seed_rng_from_u64(7);
    let mut prices = vec![250.0];
    for _ in 0..504 {
        let last = *prices.last().unwrap();
        prices.push(gbm.exact_step(last, 1.0 / 252.0, get_normal_draw(&mut rng)));
    }

    let mut estimator = GbmEstimator::daily();
    let params = estimator.estimate(&prices)?;
    println!("Estimated mu = {:.4}, sigma = {:.4}", params.mu, params.sigma);

    println!("\n=== Monte Carlo Portfolio Projection ===");
    let cfg = SimConfig {
        v0: 10_000.0,
        mu: params.mu,
        sigma: params.sigma,
        t: 1.0,
        steps: 252,
        paths: 10_000,
        seed: 42,
        keep_paths: false,
    };
    let result = simulate(&cfg)?;
    let report = RiskReport::from_terminal_values(&result.terminal, cfg.v0, &RiskConfig::default())?;

    println!("Mean terminal value:   {:>12.2}", report.mean);
    println!("Median terminal value: {:>12.2}", report.median);
    println!("Std deviation:         {:>12.2}", report.std_dev);
    println!("VaR (95%):             {:>12.2}", report.value_at_risk);
    println!("Expected shortfall:    {:>12.2}", report.expected_shortfall);
    println!("P(profit):             {:>12.2}%", report.prob_profit * 100.0);
    println!("P(loss > 10%):         {:>12.2}%", report.prob_large_loss * 100.0);

    Ok(())
}
