use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Serialize;

use stress_lab_core::analysis::{self, StressAnalysisInput};
use stress_lab_core::portfolio::AssetHolding;
use stress_lab_core::recovery::{self, RecoveryAssumptions, RecoveryPoint};
use stress_lab_core::stress::catalog;
use stress_lab_core::types::parse_amount;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Scenario catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn list_scenarios() -> NapiResult<String> {
    serde_json::to_string(catalog::list()).map_err(to_napi_error)
}

#[napi]
pub fn get_scenario(key: String) -> NapiResult<String> {
    let scenario = catalog::lookup(&key).map_err(to_napi_error)?;
    serde_json::to_string(scenario).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Stress analysis
// ---------------------------------------------------------------------------

/// Full analysis wrapped in the output envelope (warnings, metadata).
#[napi]
pub fn run_stress_analysis(input_json: String) -> NapiResult<String> {
    let input = StressAnalysisInput::from_json(&input_json).map_err(to_napi_error)?;
    let output = analysis::run_stress_analysis(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Re-run the pipeline after any change to the portfolio, scenario selection
/// or base value.
#[napi]
pub fn recompute(
    portfolio_json: String,
    scenario_key: String,
    base_value: String,
) -> NapiResult<String> {
    let portfolio: Vec<AssetHolding> =
        serde_json::from_str(&portfolio_json).map_err(to_napi_error)?;
    let base_value = parse_amount("base_value", &base_value).map_err(to_napi_error)?;
    let result =
        analysis::recompute(&portfolio, &scenario_key, base_value).map_err(to_napi_error)?;
    serde_json::to_string(&result).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Recovery
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RecoveryResult {
    months_to_recovery: Option<u32>,
    points: Vec<RecoveryPoint>,
}

#[napi]
pub fn project_recovery(
    final_value: String,
    target_value: String,
    assumptions_json: Option<String>,
) -> NapiResult<String> {
    let final_value: Decimal = parse_amount("final_value", &final_value).map_err(to_napi_error)?;
    let target_value: Decimal =
        parse_amount("target_value", &target_value).map_err(to_napi_error)?;
    let assumptions: RecoveryAssumptions = match assumptions_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => RecoveryAssumptions::default(),
    };

    let projection = recovery::project_recovery(final_value, target_value, &assumptions)
        .map_err(to_napi_error)?;
    let result = RecoveryResult {
        months_to_recovery: projection.months_to_recovery(),
        points: projection.points(),
    };
    serde_json::to_string(&result).map_err(to_napi_error)
}
