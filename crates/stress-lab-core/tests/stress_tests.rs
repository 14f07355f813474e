use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stress_lab_core::analysis::recompute;
use stress_lab_core::portfolio::{default_portfolio, AssetHolding};
use stress_lab_core::stress::catalog::{self, AssetShock, Scenario, ScenarioKind};
use stress_lab_core::stress::{compute_impacts, summarize, BestAsset, WorstAsset};
use stress_lab_core::StressLabError;

// ===========================================================================
// Scenario stress tests: end-to-end behaviour of the impact and summary
// stages across the built-in catalog.
// ===========================================================================

fn lopsided_portfolio() -> Vec<AssetHolding> {
    vec![
        AssetHolding::new("REITs", dec!(55)),
        AssetHolding::new("Bonds", dec!(12.5)),
        AssetHolding::new("International Equity", dec!(7.25)),
        AssetHolding::new("Private Credit", dec!(3)),
    ]
}

// ---------------------------------------------------------------------------
// 2008 worked example
// ---------------------------------------------------------------------------

#[test]
fn test_2008_crisis_end_to_end() {
    let scenario = catalog::lookup("2008_crisis").unwrap();
    let impacts = compute_impacts(&default_portfolio(), scenario, dec!(1000000)).unwrap();

    let changes: Vec<(String, Decimal)> = impacts
        .iter()
        .map(|i| (i.asset_name.clone(), i.dollar_change))
        .collect();
    assert_eq!(
        changes,
        vec![
            ("US Large Cap Equity".to_string(), dec!(-148000)),
            ("US Small Cap Equity".to_string(), dec!(-33800)),
            ("International Equity".to_string(), dec!(-86800)),
            ("Bonds".to_string(), dec!(13000)),
            ("REITs".to_string(), dec!(-18850)),
        ]
    );

    let summary = summarize(&impacts, dec!(1000000)).unwrap();
    assert_eq!(summary.total_dollar_change, dec!(-274450));
    assert_eq!(summary.total_percent_change, dec!(-27.445));
    assert_eq!(summary.final_value, dec!(725550));
    assert_eq!(
        summary.worst_asset,
        WorstAsset {
            name: "US Large Cap Equity".into(),
            loss: dec!(-148000),
        }
    );
    assert_eq!(
        summary.best_asset,
        BestAsset {
            name: "Bonds".into(),
            gain: dec!(13000),
        }
    );
}

// ---------------------------------------------------------------------------
// Invariants across every built-in scenario
// ---------------------------------------------------------------------------

#[test]
fn test_contributions_sum_to_total_percent() {
    for portfolio in [default_portfolio(), lopsided_portfolio()] {
        for scenario in catalog::list() {
            for base in [dec!(1000000), dec!(12345.67), dec!(1)] {
                let impacts = compute_impacts(&portfolio, scenario, base).unwrap();
                let summary = summarize(&impacts, base).unwrap();
                let sum: Decimal = impacts.iter().map(|i| i.contribution_to_loss_pct).sum();
                assert!(
                    (sum - summary.total_percent_change).abs() < dec!(0.000000001),
                    "{}: contributions {} vs total {}",
                    scenario.key,
                    sum,
                    summary.total_percent_change
                );
            }
        }
    }
}

#[test]
fn test_final_value_is_base_plus_change() {
    for scenario in catalog::list() {
        let base = dec!(987654.32);
        let impacts = compute_impacts(&lopsided_portfolio(), scenario, base).unwrap();
        let summary = summarize(&impacts, base).unwrap();
        assert_eq!(summary.final_value, base + summary.total_dollar_change);
    }
}

#[test]
fn test_uncovered_asset_is_unaffected_in_every_scenario() {
    for scenario in catalog::list() {
        let impacts = compute_impacts(&lopsided_portfolio(), scenario, dec!(200000)).unwrap();
        let private_credit = &impacts[3];
        assert_eq!(private_credit.asset_name, "Private Credit");
        assert_eq!(private_credit.dollar_change, Decimal::ZERO);
        assert_eq!(private_credit.stressed_value, private_credit.original_value);
    }
}

#[test]
fn test_all_negative_scenario_has_sentinel_best() {
    let scenario = catalog::lookup("stagflation").unwrap();
    assert!(scenario.factors.iter().all(|f| f.factor_pct < Decimal::ZERO));

    let impacts = compute_impacts(&default_portfolio(), scenario, dec!(1000000)).unwrap();
    let summary = summarize(&impacts, dec!(1000000)).unwrap();
    assert_eq!(summary.best_asset, BestAsset::default());
    assert_eq!(summary.best_asset.name, "");
    assert_eq!(summary.best_asset.gain, Decimal::ZERO);
    assert_eq!(summary.worst_asset.name, "US Large Cap Equity");
}

#[test]
fn test_custom_all_negative_scenario() {
    let scenario = Scenario {
        key: "everything_down".into(),
        name: "Everything Down".into(),
        description: "Uniform decline".into(),
        kind: ScenarioKind::Hypothetical,
        factors: ["Bonds", "REITs"]
            .iter()
            .map(|a| AssetShock {
                asset: (*a).into(),
                factor_pct: dec!(-1),
            })
            .collect(),
    };
    let portfolio = vec![
        AssetHolding::new("Bonds", dec!(50)),
        AssetHolding::new("REITs", dec!(50)),
    ];
    let impacts = compute_impacts(&portfolio, &scenario, dec!(1000)).unwrap();
    let summary = summarize(&impacts, dec!(1000)).unwrap();
    assert!(summary.best_asset.is_sentinel());
    // Equal losses: the earlier holding stays worst
    assert_eq!(summary.worst_asset.name, "Bonds");
    assert_eq!(summary.worst_asset.loss, dec!(-5));
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_empty_portfolio_summary() {
    let a = recompute(&[], "covid_crash", dec!(50000)).unwrap();
    assert!(a.impacts.is_empty());
    assert_eq!(a.summary.total_dollar_change, Decimal::ZERO);
    assert_eq!(a.summary.total_percent_change, Decimal::ZERO);
    assert_eq!(a.summary.final_value, dec!(50000));
    assert!(a.summary.worst_asset.is_sentinel());
    assert!(a.summary.best_asset.is_sentinel());
    assert_eq!(a.months_to_recovery, Some(0));
}

#[test]
fn test_allocations_not_summing_to_100_still_compute() {
    let portfolio = vec![
        AssetHolding::new("US Large Cap Equity", dec!(80)),
        AssetHolding::new("Bonds", dec!(80)),
    ];
    let a = recompute(&portfolio, "2008_crisis", dec!(100000)).unwrap();
    assert_eq!(a.total_allocation_pct, dec!(160));
    // -29,600 + 4,160
    assert_eq!(a.summary.total_dollar_change, dec!(-25440));
}

#[test]
fn test_unknown_scenario_is_surfaced() {
    let err = catalog::lookup("not_a_real_scenario").unwrap_err();
    assert!(matches!(
        err,
        StressLabError::UnknownScenarioKind(ref k) if k == "not_a_real_scenario"
    ));
    assert_eq!(err.to_string(), "Unknown scenario: 'not_a_real_scenario'");
}

#[test]
fn test_catalog_usable_across_threads() {
    let handles: Vec<_> = catalog::keys()
        .into_iter()
        .map(|key| {
            std::thread::spawn(move || {
                recompute(&default_portfolio(), key, dec!(1000000))
                    .unwrap()
                    .summary
                    .final_value
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() > Decimal::ZERO);
    }
}
