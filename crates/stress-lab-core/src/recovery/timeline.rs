use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::StressLabError;
use crate::types::{Money, Rate};
use crate::StressLabResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const MAX_HORIZON_MONTHS: u32 = 360;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Growth assumptions for the post-shock recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryAssumptions {
    /// Annual growth rate, compounded monthly (0.08 = 8%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: Rate,
    /// Months projected after the shock
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

fn default_annual_rate() -> Rate {
    dec!(0.08)
}

fn default_horizon_months() -> u32 {
    60
}

impl Default for RecoveryAssumptions {
    fn default() -> Self {
        Self {
            annual_rate: default_annual_rate(),
            horizon_months: default_horizon_months(),
        }
    }
}

/// Projected portfolio value at one month after the shock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryPoint {
    pub month: u32,
    pub projected_value: Money,
    pub has_recovered: bool,
}

/// A bounded compounding path from the stressed value back toward the
/// pre-shock value. Points are computed on demand and the sequence can be
/// walked any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryProjection {
    final_value: Money,
    target_value: Money,
    monthly_growth: Decimal,
    horizon_months: u32,
}

impl RecoveryProjection {
    pub fn final_value(&self) -> Money {
        self.final_value
    }

    pub fn target_value(&self) -> Money {
        self.target_value
    }

    pub fn horizon_months(&self) -> u32 {
        self.horizon_months
    }

    /// Value at `month`, or `None` past the horizon.
    pub fn point(&self, month: u32) -> Option<RecoveryPoint> {
        if month > self.horizon_months {
            return None;
        }
        let projected_value = self
            .monthly_growth
            .checked_powu(u64::from(month))
            .and_then(|growth| self.final_value.checked_mul(growth))
            .unwrap_or_else(|| self.saturated());
        Some(RecoveryPoint {
            month,
            projected_value,
            has_recovered: projected_value >= self.target_value,
        })
    }

    // Growth is always positive, so an overflowing value keeps the sign of
    // the starting value.
    fn saturated(&self) -> Money {
        if self.final_value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    }

    pub fn iter(&self) -> RecoveryIter<'_> {
        RecoveryIter {
            projection: self,
            next_month: 0,
        }
    }

    pub fn points(&self) -> Vec<RecoveryPoint> {
        self.iter().collect()
    }

    /// First month at which the target is reached; `None` if not within the
    /// horizon.
    pub fn months_to_recovery(&self) -> Option<u32> {
        self.iter().find(|p| p.has_recovered).map(|p| p.month)
    }
}

impl<'a> IntoIterator for &'a RecoveryProjection {
    type Item = RecoveryPoint;
    type IntoIter = RecoveryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the months `0..=horizon` of a projection.
#[derive(Debug, Clone)]
pub struct RecoveryIter<'a> {
    projection: &'a RecoveryProjection,
    next_month: u32,
}

impl Iterator for RecoveryIter<'_> {
    type Item = RecoveryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.projection.point(self.next_month)?;
        self.next_month += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.projection.horizon_months + 1)
            .saturating_sub(self.next_month) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecoveryIter<'_> {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the recovery path from `final_value` toward `target_value`.
///
/// `projected_value = final_value * (1 + annual_rate / 12) ^ month` for
/// every month up to and including the horizon.
pub fn project_recovery(
    final_value: Money,
    target_value: Money,
    assumptions: &RecoveryAssumptions,
) -> StressLabResult<RecoveryProjection> {
    if assumptions.annual_rate < -Decimal::ONE || assumptions.annual_rate > Decimal::ONE {
        return Err(StressLabError::InvalidInput {
            field: "recovery.annual_rate".into(),
            reason: "Annual rate must be between -1 and 1".into(),
        });
    }
    if assumptions.horizon_months > MAX_HORIZON_MONTHS {
        return Err(StressLabError::InvalidInput {
            field: "recovery.horizon_months".into(),
            reason: format!("Horizon cannot exceed {} months", MAX_HORIZON_MONTHS),
        });
    }

    Ok(RecoveryProjection {
        final_value,
        target_value,
        monthly_growth: Decimal::ONE + assumptions.annual_rate / MONTHS_PER_YEAR,
        horizon_months: assumptions.horizon_months,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
