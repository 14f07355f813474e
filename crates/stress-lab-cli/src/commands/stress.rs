use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use stress_lab_core::analysis::{self, StressAnalysisInput};
use stress_lab_core::portfolio::{default_portfolio, AssetHolding};
use stress_lab_core::recovery::RecoveryAssumptions;
use stress_lab_core::types::parse_amount;

use crate::input;

const DEFAULT_BASE_VALUE: &str = "1000000";

/// Arguments for a portfolio stress run
#[derive(Args)]
pub struct StressArgs {
    /// Path to JSON/YAML input file (portfolio, and optionally scenario,
    /// base_value and recovery)
    #[arg(long)]
    pub input: Option<String>,

    /// Scenario key (see `stress-lab scenarios`)
    #[arg(long)]
    pub scenario: Option<String>,

    /// Pre-shock portfolio value
    #[arg(long, allow_hyphen_values = true)]
    pub base_value: Option<String>,

    /// Annual recovery growth rate, compounded monthly
    #[arg(long, allow_hyphen_values = true)]
    pub annual_rate: Option<Decimal>,

    /// Recovery horizon in months
    #[arg(long)]
    pub horizon: Option<u32>,
}

/// Input document with every field but the portfolio optional, so flags can
/// fill the gaps.
#[derive(Debug, Deserialize)]
struct StressDocument {
    portfolio: Vec<AssetHolding>,
    scenario: Option<String>,
    base_value: Option<Decimal>,
    recovery: Option<RecoveryAssumptions>,
}

pub fn run_stress(args: StressArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let doc: Option<StressDocument> = if let Some(ref path) = args.input {
        debug!(path = %path, "reading stress input file");
        Some(input::file::read_input(path)?)
    } else {
        input::stdin::read_stdin()?
    };

    let (portfolio, doc_scenario, doc_base, doc_recovery) = match doc {
        Some(d) => {
            debug!(holdings = d.portfolio.len(), "using portfolio from input document");
            (d.portfolio, d.scenario, d.base_value, d.recovery)
        }
        None => {
            debug!("no input document; using default portfolio");
            (default_portfolio(), None, None, None)
        }
    };

    let scenario = args
        .scenario
        .or(doc_scenario)
        .ok_or("--scenario <key> required (see `stress-lab scenarios`)")?;

    let base_value = match (args.base_value, doc_base) {
        (Some(raw), _) => parse_amount("base_value", &raw)?,
        (None, Some(v)) => v,
        (None, None) => parse_amount("base_value", DEFAULT_BASE_VALUE)?,
    };

    let mut recovery = doc_recovery.unwrap_or_default();
    if let Some(rate) = args.annual_rate {
        recovery.annual_rate = rate;
    }
    if let Some(horizon) = args.horizon {
        recovery.horizon_months = horizon;
    }
    debug!(
        scenario = %scenario,
        %base_value,
        annual_rate = %recovery.annual_rate,
        horizon_months = recovery.horizon_months,
        "resolved stress run"
    );

    let stress_input = StressAnalysisInput {
        portfolio,
        scenario,
        base_value,
        recovery,
    };
    let result = analysis::run_stress_analysis(&stress_input)?;
    Ok(serde_json::to_value(result)?)
}
