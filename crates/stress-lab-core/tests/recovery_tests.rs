use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stress_lab_core::analysis::recompute;
use stress_lab_core::portfolio::default_portfolio;
use stress_lab_core::recovery::{project_recovery, RecoveryAssumptions};
use stress_lab_core::stress::catalog;

// ===========================================================================
// Recovery timeline tests
// ===========================================================================

#[test]
fn test_recovery_after_each_scenario_is_monotone() {
    for scenario in catalog::list() {
        let a = recompute(&default_portfolio(), &scenario.key, dec!(1000000)).unwrap();
        assert_eq!(a.recovery.len(), 61, "{}", scenario.key);

        for pair in a.recovery.windows(2) {
            assert!(
                pair[1].projected_value > pair[0].projected_value,
                "{}: month {} not above month {}",
                scenario.key,
                pair[1].month,
                pair[0].month
            );
        }

        // Once recovered, every later point stays recovered
        let first = a.recovery.iter().position(|p| p.has_recovered);
        if let Some(idx) = first {
            assert!(a.recovery[..idx].iter().all(|p| !p.has_recovered));
            assert!(a.recovery[idx..]
                .iter()
                .all(|p| p.has_recovered && p.projected_value >= dec!(1000000)));
        }
        assert_eq!(a.months_to_recovery, first.map(|i| i as u32));
    }
}

#[test]
fn test_gain_scenario_recovered_immediately() {
    // Bonds-only portfolio gains in the dot-com bust
    let portfolio = vec![stress_lab_core::portfolio::AssetHolding::new("Bonds", dec!(100))];
    let a = recompute(&portfolio, "dotcom_bust", dec!(100000)).unwrap();
    assert_eq!(a.summary.final_value, dec!(132500));
    assert_eq!(a.months_to_recovery, Some(0));
}

#[test]
fn test_projection_values_match_closed_form() {
    let p = project_recovery(dec!(725550), dec!(1000000), &RecoveryAssumptions::default())
        .unwrap();
    let points = p.points();
    assert_eq!(points[0].projected_value, dec!(725550));
    // 725,550 * (1 + 0.08/12)^48 = 999,xxx; month 49 crosses the target
    assert!(!points[48].has_recovered);
    assert!(points[49].has_recovered);
    assert_eq!(p.months_to_recovery(), Some(49));
}

#[test]
fn test_negative_final_value_never_recovers() {
    let p = project_recovery(dec!(-100), dec!(1000), &RecoveryAssumptions::default()).unwrap();
    assert_eq!(p.months_to_recovery(), None);
    assert!(p.iter().all(|pt| pt.projected_value < Decimal::ZERO));
}

#[test]
fn test_iterator_reports_exact_length() {
    let p = project_recovery(dec!(1), dec!(2), &RecoveryAssumptions::default()).unwrap();
    let mut it = p.iter();
    assert_eq!(it.len(), 61);
    it.next();
    it.next();
    assert_eq!(it.len(), 59);
    assert_eq!(it.count(), 59);
}
