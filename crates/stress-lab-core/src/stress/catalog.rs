use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::StressLabError;
use crate::types::Percent;
use crate::StressLabResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Whether the scenario replays a real market event or is hypothetical.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Historical,
    Hypothetical,
}

/// Return shock applied to one asset class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetShock {
    pub asset: String,
    /// Percentage return (e.g. -37.0 for a 37% decline)
    pub factor_pct: Percent,
}

/// A named stress scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub key: String,
    pub name: String,
    pub description: String,
    pub kind: ScenarioKind,
    pub factors: Vec<AssetShock>,
}

impl Scenario {
    /// Factor for an asset, if the scenario names it.
    pub fn factor_for(&self, asset: &str) -> Option<Percent> {
        self.factors
            .iter()
            .find(|s| s.asset == asset)
            .map(|s| s.factor_pct)
    }
}

// ---------------------------------------------------------------------------
// Built-in scenarios
// ---------------------------------------------------------------------------

const LARGE_CAP: &str = "US Large Cap Equity";
const SMALL_CAP: &str = "US Small Cap Equity";
const INTERNATIONAL: &str = "International Equity";
const BONDS: &str = "Bonds";
const REITS: &str = "REITs";

static CATALOG: OnceLock<Vec<Scenario>> = OnceLock::new();

fn scenario(
    key: &str,
    name: &str,
    description: &str,
    kind: ScenarioKind,
    factors: [Decimal; 5],
) -> Scenario {
    let assets = [LARGE_CAP, SMALL_CAP, INTERNATIONAL, BONDS, REITS];
    Scenario {
        key: key.into(),
        name: name.into(),
        description: description.into(),
        kind,
        factors: assets
            .iter()
            .zip(factors)
            .map(|(asset, factor_pct)| AssetShock {
                asset: (*asset).into(),
                factor_pct,
            })
            .collect(),
    }
}

fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "2008_crisis",
            "2008 Financial Crisis",
            "Credit freeze and bank failures following the subprime collapse; \
             equities and real estate fell sharply while Treasuries rallied.",
            ScenarioKind::Historical,
            [dec!(-37.0), dec!(-33.8), dec!(-43.4), dec!(5.2), dec!(-37.7)],
        ),
        scenario(
            "dotcom_bust",
            "Dot-Com Bust (2000-2002)",
            "Technology-led bear market; growth equities collapsed while bonds \
             and REITs held up.",
            ScenarioKind::Historical,
            [dec!(-43.0), dec!(-20.5), dec!(-44.0), dec!(32.5), dec!(52.0)],
        ),
        scenario(
            "covid_crash",
            "COVID-19 Crash (Feb-Mar 2020)",
            "Pandemic lockdown sell-off; the fastest bear market on record.",
            ScenarioKind::Historical,
            [dec!(-33.8), dec!(-40.5), dec!(-33.4), dec!(3.0), dec!(-42.0)],
        ),
        scenario(
            "rate_shock_2022",
            "2022 Rate Shock",
            "Aggressive central bank tightening; stocks and bonds fell together.",
            ScenarioKind::Historical,
            [dec!(-18.1), dec!(-20.4), dec!(-14.5), dec!(-13.0), dec!(-24.9)],
        ),
        scenario(
            "black_monday_1987",
            "Black Monday (1987)",
            "Single-day global equity crash of October 19, 1987.",
            ScenarioKind::Historical,
            [dec!(-20.5), dec!(-17.0), dec!(-14.5), dec!(1.5), dec!(-12.0)],
        ),
        scenario(
            "stagflation",
            "Stagflation",
            "Persistent inflation with stalling growth; every asset class \
             reprices lower.",
            ScenarioKind::Hypothetical,
            [dec!(-25.0), dec!(-30.0), dec!(-28.0), dec!(-8.0), dec!(-15.0)],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// All built-in scenarios, in display order.
pub fn list() -> &'static [Scenario] {
    CATALOG.get_or_init(builtin_scenarios)
}

/// Keys of all built-in scenarios, in display order.
pub fn keys() -> Vec<&'static str> {
    list().iter().map(|s| s.key.as_str()).collect()
}

/// Find a scenario by key.
pub fn lookup(key: &str) -> StressLabResult<&'static Scenario> {
    list()
        .iter()
        .find(|s| s.key == key)
        .ok_or_else(|| StressLabError::UnknownScenarioKind(key.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
