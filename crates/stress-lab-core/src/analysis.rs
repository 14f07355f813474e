use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::StressLabError;
use crate::portfolio::{portfolio_warnings, total_allocation, AssetHolding};
use crate::recovery::{project_recovery, RecoveryAssumptions, RecoveryPoint};
use crate::stress::catalog::{self, Scenario, ScenarioKind};
use crate::stress::{compute_impacts, summarize, AssetImpact, PortfolioSummary};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::StressLabResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input document for a full stress analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressAnalysisInput {
    pub portfolio: Vec<AssetHolding>,
    /// Catalog key, e.g. "2008_crisis"
    pub scenario: String,
    pub base_value: Money,
    #[serde(default)]
    pub recovery: RecoveryAssumptions,
}

impl StressAnalysisInput {
    /// Parse an input document. Malformed documents, including non-numeric
    /// amounts, are reported as invalid input.
    pub fn from_json(json: &str) -> StressLabResult<Self> {
        serde_json::from_str(json).map_err(|e| StressLabError::InvalidInput {
            field: "input".into(),
            reason: e.to_string(),
        })
    }
}

/// Identity of the scenario a result was computed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub key: String,
    pub name: String,
    pub kind: ScenarioKind,
}

/// Everything a presentation layer needs after an input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressAnalysis {
    pub scenario: ScenarioInfo,
    pub base_value: Money,
    pub total_allocation_pct: Percent,
    pub impacts: Vec<AssetImpact>,
    pub summary: PortfolioSummary,
    pub recovery: Vec<RecoveryPoint>,
    /// First month the pre-shock value is regained; `None` if not within
    /// the horizon
    pub months_to_recovery: Option<u32>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Re-run the whole pipeline with the default recovery assumptions.
pub fn recompute(
    portfolio: &[AssetHolding],
    scenario_key: &str,
    base_value: Money,
) -> StressLabResult<StressAnalysis> {
    recompute_with(
        portfolio,
        scenario_key,
        base_value,
        &RecoveryAssumptions::default(),
    )
}

/// Re-run the whole pipeline: catalog lookup, per-asset impacts, summary and
/// recovery timeline.
pub fn recompute_with(
    portfolio: &[AssetHolding],
    scenario_key: &str,
    base_value: Money,
    assumptions: &RecoveryAssumptions,
) -> StressLabResult<StressAnalysis> {
    let scenario = catalog::lookup(scenario_key)?;
    analyze(portfolio, scenario, base_value, assumptions)
}

fn analyze(
    portfolio: &[AssetHolding],
    scenario: &'static Scenario,
    base_value: Money,
    assumptions: &RecoveryAssumptions,
) -> StressLabResult<StressAnalysis> {
    debug!(
        scenario = %scenario.key,
        holdings = portfolio.len(),
        %base_value,
        "computing stress impacts"
    );

    let impacts = compute_impacts(portfolio, scenario, base_value)?;
    let summary = summarize(&impacts, base_value)?;
    debug!(
        total_dollar_change = %summary.total_dollar_change,
        final_value = %summary.final_value,
        "stress summary"
    );

    let projection = project_recovery(summary.final_value, base_value, assumptions)?;
    let recovery = projection.points();
    let months_to_recovery = projection.months_to_recovery();
    debug!(?months_to_recovery, "recovery projected");

    Ok(StressAnalysis {
        scenario: ScenarioInfo {
            key: scenario.key.clone(),
            name: scenario.name.clone(),
            kind: scenario.kind,
        },
        base_value,
        total_allocation_pct: total_allocation(portfolio),
        impacts,
        summary,
        recovery,
        months_to_recovery,
    })
}

/// Run a stress analysis and wrap it in the standard output envelope.
pub fn run_stress_analysis(
    input: &StressAnalysisInput,
) -> StressLabResult<ComputationOutput<StressAnalysis>> {
    let start = Instant::now();

    let scenario = catalog::lookup(&input.scenario)?;
    let analysis = analyze(
        &input.portfolio,
        scenario,
        input.base_value,
        &input.recovery,
    )?;

    let mut warnings = portfolio_warnings(&input.portfolio);
    if input.base_value <= Decimal::ZERO {
        warnings.push(format!(
            "Base value {} is not positive; percentage figures are not meaningful",
            input.base_value
        ));
    }
    for holding in &input.portfolio {
        if scenario.factor_for(&holding.name).is_none() {
            warnings.push(format!(
                "'{}' is not covered by scenario '{}'; treated as unaffected",
                holding.name, scenario.key
            ));
        }
    }
    if analysis.months_to_recovery.is_none() {
        warnings.push(format!(
            "Pre-shock value not regained within {} months",
            input.recovery.horizon_months
        ));
    }
    for w in &warnings {
        warn!("{}", w);
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Historical/hypothetical scenario stress test with compounding recovery",
        &serde_json::json!({
            "scenario": input.scenario,
            "num_holdings": input.portfolio.len(),
            "base_value": input.base_value.to_string(),
            "annual_recovery_rate": input.recovery.annual_rate.to_string(),
            "horizon_months": input.recovery.horizon_months,
        }),
        warnings,
        elapsed,
        analysis,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
