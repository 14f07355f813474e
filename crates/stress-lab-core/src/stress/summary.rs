use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::impact::AssetImpact;
use crate::types::{out_of_range, percent_of, Money, Percent};
use crate::StressLabResult;

/// Holding with the largest dollar loss. An empty `name` means nothing lost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorstAsset {
    pub name: String,
    pub loss: Money,
}

/// Holding with the largest dollar gain. An empty `name` means nothing gained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestAsset {
    pub name: String,
    pub gain: Money,
}

impl WorstAsset {
    pub fn is_sentinel(&self) -> bool {
        self.name.is_empty()
    }
}

impl BestAsset {
    pub fn is_sentinel(&self) -> bool {
        self.name.is_empty()
    }
}

/// Portfolio-level aggregation of a stress run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_dollar_change: Money,
    pub total_percent_change: Percent,
    pub worst_asset: WorstAsset,
    /// Stays empty when no holding gains
    pub best_asset: BestAsset,
    pub final_value: Money,
}

/// Aggregate per-asset impacts into a portfolio summary.
///
/// Worst and best both start from a zero threshold and are only replaced on a
/// strict improvement, so ties keep the earlier holding. If every holding
/// loses value `best_asset` stays empty rather than naming the least-bad one.
pub fn summarize(impacts: &[AssetImpact], base_value: Money) -> StressLabResult<PortfolioSummary> {
    let mut total_dollar_change = Decimal::ZERO;
    let mut worst = WorstAsset::default();
    let mut best = BestAsset::default();

    for impact in impacts {
        total_dollar_change = total_dollar_change
            .checked_add(impact.dollar_change)
            .ok_or_else(|| out_of_range("total_dollar_change"))?;

        if impact.dollar_change < worst.loss {
            worst = WorstAsset {
                name: impact.asset_name.clone(),
                loss: impact.dollar_change,
            };
        }
        if impact.dollar_change > best.gain {
            best = BestAsset {
                name: impact.asset_name.clone(),
                gain: impact.dollar_change,
            };
        }
    }

    let final_value = base_value
        .checked_add(total_dollar_change)
        .ok_or_else(|| out_of_range("final_value"))?;

    Ok(PortfolioSummary {
        total_dollar_change,
        total_percent_change: percent_of("total_percent_change", total_dollar_change, base_value)?,
        worst_asset: worst,
        best_asset: best,
        final_value,
    })
}
