// tests/simulation_test.rs
use quant_risk::mc::engine::{simulate, SimConfig};
use quant_risk::models::estimate::GbmEstimator;
use quant_risk::models::gbm::{Gbm, GbmParams};
use quant_risk::risk::{RiskConfig, RiskReport};
use quant_risk::rng::{get_normal_draw, seed_rng_from_u64};

#[test]
fn test_mean_terminal_value_vs_analytic() {
    // Law of large numbers: sample mean converges to V0 * e^(mu*T).
    let cfg = SimConfig {
        v0: 10_000.0,
        mu: 0.1245,
        sigma: 0.1832,
        t: 1.0,
        steps: 252,
        paths: 10_000,
        seed: 42,
        keep_paths: false,
    };

    let result = simulate(&cfg).expect("valid configuration");
    let mean = result.terminal.iter().sum::<f64>() / result.terminal.len() as f64;
    let expected = cfg.v0 * (cfg.mu * cfg.t).exp();

    let rel_error = (mean - expected).abs() / expected;

    println!("\nMean terminal value: {}", mean);
    println!("Analytic E[V_T]: {}", expected);
    println!("Relative Error: {}", rel_error);

    // ~0.2% standard error at 10k paths; 1% band is a comfortable bound.
    assert!(rel_error < 0.01, "Relative error exceeds 1%: {}", rel_error);
}

#[test]
fn test_seed_reproducibility() {
    let cfg = SimConfig {
        paths: 2_000,
        steps: 50,
        seed: 99,
        ..Default::default()
    };

    let a = simulate(&cfg).unwrap();
    let b = simulate(&cfg).unwrap();
    assert_eq!(a.terminal, b.terminal);

    let other_seed = SimConfig { seed: 100, ..cfg };
    let c = simulate(&other_seed).unwrap();
    assert_ne!(a.terminal, c.terminal);
}

#[test]
fn test_risk_report_from_simulation() {
    let cfg = SimConfig {
        v0: 10_000.0,
        mu: 0.08,
        sigma: 0.25,
        t: 1.0,
        steps: 252,
        paths: 20_000,
        seed: 7,
        keep_paths: false,
    };
    let result = simulate(&cfg).unwrap();
    let report =
        RiskReport::from_terminal_values(&result.terminal, cfg.v0, &RiskConfig::default())
            .unwrap();

    println!("\nMean: {}", report.mean);
    println!("Median: {}", report.median);
    println!("VaR(95%): {}", report.value_at_risk);
    println!("Expected Shortfall: {}", report.expected_shortfall);
    println!("P(profit): {}", report.prob_profit);
    println!("P(loss > 10%): {}", report.prob_large_loss);

    // VaR at 95% sits in the lower tail of a right-skewed lognormal output.
    assert!(report.value_at_risk <= report.median);
    assert!(report.expected_shortfall <= report.value_at_risk);
    // Lognormal: mean above median.
    assert!(report.mean > report.median);

    assert!(report.prob_profit > 0.0 && report.prob_profit < 1.0);
    assert!(report.prob_large_loss > 0.0 && report.prob_large_loss < 1.0);
    assert!(report.prob_large_loss < report.prob_profit);

    // With mu = 8% the median path ends near V0 * e^(mu - sigma^2/2) ~ 1.05 V0,
    // so profit probability should sit modestly above one half.
    assert!(report.prob_profit > 0.5);
}

#[test]
fn test_estimator_simulator_round_trip() {
    // Generate a synthetic daily series from known GBM parameters, then check
    // the estimator recovers them within statistical tolerance.
    let true_params = GbmParams::new(0.10, 0.20).unwrap();
    let gbm = Gbm::new(true_params);
    let dt = 1.0 / 252.0;

    let mut rng = seed_rng_from_u64(2024);
    let mut prices = vec![100.0];
    for _ in 0..5_000 {
        let last = *prices.last().unwrap();
        let z = get_normal_draw(&mut rng);
        prices.push(gbm.exact_step(last, dt, z));
    }

    let mut estimator = GbmEstimator::daily();
    let est = estimator.estimate(&prices).unwrap();

    println!("\nTrue mu: {}, estimated mu: {}", true_params.mu, est.mu);
    println!("True sigma: {}, estimated sigma: {}", true_params.sigma, est.sigma);

    // Volatility estimates tightly (stderr ~ sigma/sqrt(2n) ~ 0.2%).
    assert!(
        (est.sigma - true_params.sigma).abs() / true_params.sigma < 0.05,
        "sigma estimate off: {}",
        est.sigma
    );
    // Drift is inherently noisy: stderr ~ sigma/sqrt(years) ~ 4.5% absolute.
    assert!(
        (est.mu - true_params.mu).abs() < 0.15,
        "mu estimate off: {}",
        est.mu
    );

    // The cached parameters feed straight into a simulation run.
    let cfg = SimConfig {
        v0: 10_000.0,
        mu: est.mu,
        sigma: est.sigma,
        t: 1.0,
        steps: 252,
        paths: 5_000,
        seed: 11,
        keep_paths: false,
    };
    let result = simulate(&cfg).unwrap();
    assert_eq!(result.num_paths(), 5_000);
}

#[test]
fn test_single_step_matches_multi_step_distribution() {
    // The exact GBM step makes the terminal distribution independent of step
    // count; compare sample moments of 1-step vs 252-step runs.
    let base = SimConfig {
        v0: 1_000.0,
        mu: 0.05,
        sigma: 0.3,
        t: 1.0,
        steps: 1,
        paths: 50_000,
        seed: 5,
        keep_paths: false,
    };
    let fine = SimConfig {
        steps: 252,
        seed: 6,
        ..base.clone()
    };

    let coarse_mean = {
        let r = simulate(&base).unwrap();
        r.terminal.iter().sum::<f64>() / r.terminal.len() as f64
    };
    let fine_mean = {
        let r = simulate(&fine).unwrap();
        r.terminal.iter().sum::<f64>() / r.terminal.len() as f64
    };

    let expected = 1_000.0 * 0.05f64.exp();
    assert!((coarse_mean - expected).abs() / expected < 0.01);
    assert!((fine_mean - expected).abs() / expected < 0.01);
}
