use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StressLabError;
use crate::StressLabResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages expressed in whole points (40 = 40%).
pub type Percent = Decimal;

/// Rates expressed as decimals (0.08 = 8%). Never as percentages.
pub type Rate = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Parse a user-supplied amount, reporting the offending field on failure.
pub fn parse_amount(field: &str, raw: &str) -> StressLabResult<Money> {
    let trimmed = raw.trim().replace(',', "");
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&trimmed))
        .map_err(|_| StressLabError::InvalidInput {
            field: field.to_string(),
            reason: format!("'{}' is not a number", raw),
        })
}

/// Error for a figure that does not fit in 128-bit decimal arithmetic.
pub(crate) fn out_of_range(field: &str) -> StressLabError {
    StressLabError::InvalidInput {
        field: field.to_string(),
        reason: "Value is outside the range of decimal arithmetic".into(),
    }
}

/// `numerator / denominator * 100`, or zero when the denominator is zero.
pub(crate) fn percent_of(
    field: &str,
    numerator: Decimal,
    denominator: Decimal,
) -> StressLabResult<Percent> {
    if denominator.is_zero() {
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| out_of_range(field))
}
