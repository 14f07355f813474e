use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::Scenario;
use crate::portfolio::AssetHolding;
use crate::types::{out_of_range, percent_of, Money, Percent};
use crate::StressLabResult;

/// Shocked result for a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetImpact {
    pub asset_name: String,
    pub allocation_pct: Percent,
    pub original_value: Money,
    pub stressed_value: Money,
    pub dollar_change: Money,
    /// The scenario factor applied to this holding (0 when unaffected)
    pub percent_change: Percent,
    /// Dollar change relative to the whole base value, so contributions
    /// across holdings add up to the portfolio percent change
    pub contribution_to_loss_pct: Percent,
}

/// Apply a scenario's factors to every holding, preserving portfolio order.
///
/// Holdings the scenario does not name are left unchanged (factor 0). Fails
/// with `InvalidInput` only when a figure overflows decimal arithmetic.
pub fn compute_impacts(
    portfolio: &[AssetHolding],
    scenario: &Scenario,
    base_value: Money,
) -> StressLabResult<Vec<AssetImpact>> {
    portfolio
        .iter()
        .map(|holding| {
            let factor = scenario
                .factor_for(&holding.name)
                .unwrap_or(Decimal::ZERO);
            impact_for(holding, factor, base_value)
        })
        .collect()
}

fn impact_for(
    holding: &AssetHolding,
    factor: Percent,
    base_value: Money,
) -> StressLabResult<AssetImpact> {
    let original_value = base_value
        .checked_mul(holding.allocation_pct / Decimal::ONE_HUNDRED)
        .ok_or_else(|| out_of_range("base_value"))?;
    let stressed_value = original_value
        .checked_mul(Decimal::ONE + factor / Decimal::ONE_HUNDRED)
        .ok_or_else(|| out_of_range("base_value"))?;
    let dollar_change = stressed_value
        .checked_sub(original_value)
        .ok_or_else(|| out_of_range("base_value"))?;

    Ok(AssetImpact {
        asset_name: holding.name.clone(),
        allocation_pct: holding.allocation_pct,
        original_value,
        stressed_value,
        dollar_change,
        percent_change: factor,
        contribution_to_loss_pct: percent_of("base_value", dollar_change, base_value)?,
    })
}
