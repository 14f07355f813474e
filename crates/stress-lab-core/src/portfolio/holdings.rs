use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::types::Percent;

/// A single asset class held in the portfolio.
///
/// `volatility` and `beta` are descriptive only; the stress engine carries
/// them through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    pub name: String,
    /// Share of the total portfolio value, in whole percent (40 = 40%)
    pub allocation_pct: Percent,
    #[serde(default)]
    pub volatility: Decimal,
    #[serde(default)]
    pub beta: Decimal,
}

impl AssetHolding {
    pub fn new(name: impl Into<String>, allocation_pct: Percent) -> Self {
        Self {
            name: name.into(),
            allocation_pct,
            volatility: Decimal::ZERO,
            beta: Decimal::ZERO,
        }
    }
}

/// Sum of all allocations. Callers use this to flag portfolios that do not
/// add up to 100; the engine never enforces it. Saturates at the decimal
/// bounds.
pub fn total_allocation(portfolio: &[AssetHolding]) -> Percent {
    portfolio
        .iter()
        .fold(Decimal::ZERO, |acc, h| acc.saturating_add(h.allocation_pct))
}

/// The five-asset-class starting portfolio (40/10/20/25/5).
pub fn default_portfolio() -> Vec<AssetHolding> {
    vec![
        AssetHolding {
            name: "US Large Cap Equity".into(),
            allocation_pct: dec!(40),
            volatility: dec!(15.5),
            beta: dec!(1.0),
        },
        AssetHolding {
            name: "US Small Cap Equity".into(),
            allocation_pct: dec!(10),
            volatility: dec!(20.0),
            beta: dec!(1.2),
        },
        AssetHolding {
            name: "International Equity".into(),
            allocation_pct: dec!(20),
            volatility: dec!(17.0),
            beta: dec!(0.9),
        },
        AssetHolding {
            name: "Bonds".into(),
            allocation_pct: dec!(25),
            volatility: dec!(5.0),
            beta: dec!(0.1),
        },
        AssetHolding {
            name: "REITs".into(),
            allocation_pct: dec!(5),
            volatility: dec!(19.0),
            beta: dec!(0.8),
        },
    ]
}

/// Non-blocking observations about a portfolio's shape.
pub fn portfolio_warnings(portfolio: &[AssetHolding]) -> Vec<String> {
    let mut warnings = Vec::new();

    let total = total_allocation(portfolio);
    if !portfolio.is_empty() && total != Decimal::ONE_HUNDRED {
        warnings.push(format!(
            "Allocations sum to {}%, not 100%",
            total.normalize()
        ));
    }

    let mut seen = HashSet::new();
    for holding in portfolio {
        if !seen.insert(holding.name.as_str()) {
            warnings.push(format!(
                "Asset '{}' appears more than once in the portfolio",
                holding.name
            ));
        }
    }

    warnings
}
