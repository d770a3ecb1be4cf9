// tests/implied_vol_test.rs
use quant_risk::analytics::black_scholes::{OptionContract, OptionKind};
use quant_risk::analytics::implied_vol::{implied_vol, IvConfig};
use quant_risk::QuantError;

#[test]
fn test_round_trip_call() {
    let sigma_true = 0.25;
    let contract = OptionContract::new(100.0, 105.0, 1.0, 0.05, sigma_true, 0.02).unwrap();
    let target = contract.price(OptionKind::Call);

    let recovered = implied_vol(
        target,
        OptionKind::Call,
        100.0,
        105.0,
        1.0,
        0.05,
        0.02,
        &IvConfig::default(),
    )
    .unwrap();

    println!("\nTrue sigma: {}", sigma_true);
    println!("Recovered sigma: {}", recovered);

    assert!(
        (recovered - sigma_true).abs() < 1e-4,
        "round trip error: {}",
        (recovered - sigma_true).abs()
    );
}

#[test]
fn test_round_trip_put() {
    let sigma_true = 0.35;
    let contract = OptionContract::without_dividend(90.0, 100.0, 0.5, 0.03, sigma_true).unwrap();
    let target = contract.price(OptionKind::Put);

    let recovered = implied_vol(
        target,
        OptionKind::Put,
        90.0,
        100.0,
        0.5,
        0.03,
        0.0,
        &IvConfig::default(),
    )
    .unwrap();

    assert!((recovered - sigma_true).abs() < 1e-4);
}

#[test]
fn test_round_trip_grid() {
    // The solver must recover sigma across moneyness, maturity and vol level.
    let cfg = IvConfig::default();
    for &sigma_true in &[0.1, 0.2, 0.4, 0.8] {
        for &k in &[80.0, 100.0, 120.0] {
            for &t in &[0.25, 1.0, 2.0] {
                for &kind in &[OptionKind::Call, OptionKind::Put] {
                    let contract =
                        OptionContract::new(100.0, k, t, 0.05, sigma_true, 0.01).unwrap();
                    let target = contract.price(kind);

                    let recovered =
                        implied_vol(target, kind, 100.0, k, t, 0.05, 0.01, &cfg).unwrap();
                    assert!(
                        (recovered - sigma_true).abs() < 1e-4,
                        "sigma {} not recovered for k={} t={} kind={:?}: got {}",
                        sigma_true,
                        k,
                        t,
                        kind,
                        recovered
                    );
                }
            }
        }
    }
}

#[test]
fn test_price_above_upper_bound_is_arbitrage() {
    // A call can never be worth more than the dividend-discounted spot.
    let err = implied_vol(
        101.0,
        OptionKind::Call,
        100.0,
        100.0,
        1.0,
        0.05,
        0.0,
        &IvConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, QuantError::ArbitrageViolation { .. }));
}

#[test]
fn test_price_below_intrinsic_is_arbitrage() {
    // Deep ITM call priced below its discounted intrinsic floor.
    let err = implied_vol(
        40.0,
        OptionKind::Call,
        150.0,
        100.0,
        1.0,
        0.05,
        0.0,
        &IvConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, QuantError::ArbitrageViolation { .. }));
}

#[test]
fn test_invalid_inputs_rejected() {
    let cfg = IvConfig::default();
    assert!(implied_vol(5.0, OptionKind::Call, -1.0, 100.0, 1.0, 0.05, 0.0, &cfg).is_err());
    assert!(implied_vol(5.0, OptionKind::Call, 100.0, 100.0, 0.0, 0.05, 0.0, &cfg).is_err());
    assert!(implied_vol(f64::NAN, OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.0, &cfg).is_err());
}

#[test]
fn test_iteration_budget_exhaustion_reported() {
    // One iteration is not enough to move from the 20% guess to 80% vol.
    let sigma_true = 0.8;
    let contract = OptionContract::without_dividend(100.0, 100.0, 1.0, 0.05, sigma_true).unwrap();
    let target = contract.price(OptionKind::Call);

    let cfg = IvConfig {
        max_iterations: 1,
        ..IvConfig::default()
    };
    let err = implied_vol(target, OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.0, &cfg)
        .unwrap_err();
    assert!(matches!(err, QuantError::ConvergenceFailure { .. }));
}
