use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use stress_lab_core::recovery::{project_recovery, RecoveryAssumptions, RecoveryPoint};
use stress_lab_core::types::{parse_amount, with_metadata};

/// Arguments for a standalone recovery projection
#[derive(Args)]
pub struct RecoveryArgs {
    /// Post-shock portfolio value
    #[arg(long, allow_hyphen_values = true)]
    pub final_value: String,

    /// Pre-shock value to recover to
    #[arg(long, allow_hyphen_values = true)]
    pub target_value: String,

    /// Annual growth rate, compounded monthly
    #[arg(long, default_value = "0.08", allow_hyphen_values = true)]
    pub annual_rate: Decimal,

    /// Horizon in months
    #[arg(long, default_value = "60")]
    pub horizon: u32,
}

#[derive(Debug, Serialize)]
struct RecoveryOutput {
    final_value: Decimal,
    target_value: Decimal,
    months_to_recovery: Option<u32>,
    points: Vec<RecoveryPoint>,
}

pub fn run_recovery(args: RecoveryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let final_value = parse_amount("final_value", &args.final_value)?;
    let target_value = parse_amount("target_value", &args.target_value)?;
    let assumptions = RecoveryAssumptions {
        annual_rate: args.annual_rate,
        horizon_months: args.horizon,
    };

    let projection = project_recovery(final_value, target_value, &assumptions)?;
    let mut warnings = Vec::new();
    let months_to_recovery = projection.months_to_recovery();
    if months_to_recovery.is_none() {
        warnings.push(format!(
            "Target not reached within {} months",
            assumptions.horizon_months
        ));
    }

    let output = RecoveryOutput {
        final_value,
        target_value,
        months_to_recovery,
        points: projection.points(),
    };
    let elapsed = start.elapsed().as_micros() as u64;
    let result = with_metadata(
        "Fixed-rate monthly compounding recovery",
        &assumptions,
        warnings,
        elapsed,
        output,
    );
    Ok(serde_json::to_value(result)?)
}
