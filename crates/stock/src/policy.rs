//! Stock policy: the thresholds and rounding units the engine applies.
//!
//! `StockPolicy::default()` is the back-office policy. A different policy can be
//! loaded from JSON for a deployment; it must pass `validate`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{CalcError, CalcResult};

use crate::item::ItemKind;

/// Minimum stock per item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimumStock {
    pub measurable: Decimal,
    pub countable: Decimal,
    pub elaborated: Decimal,
    /// Applied to kinds the engine does not recognise.
    pub fallback: Decimal,
}

impl Default for MinimumStock {
    fn default() -> Self {
        Self {
            measurable: Decimal::from(20),
            countable: Decimal::from(10),
            elaborated: Decimal::from(5),
            fallback: Decimal::from(10),
        }
    }
}

/// Reorder rounding units per item kind.
///
/// Countable items with a valid packaging round to their package size instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingUnits {
    pub elaborated: Decimal,
    pub fallback: Decimal,
}

impl Default for RoundingUnits {
    fn default() -> Self {
        Self {
            elaborated: Decimal::from(5),
            fallback: Decimal::from(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockPolicy {
    pub minimum: MinimumStock,
    /// Fraction of the minimum below which stock is critical (rounded up).
    pub critical_ratio: Decimal,
    /// Reorders aim for `minimum * reorder_multiplier`.
    pub reorder_multiplier: Decimal,
    pub rounding: RoundingUnits,
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            minimum: MinimumStock::default(),
            critical_ratio: Decimal::new(30, 2),
            reorder_multiplier: Decimal::from(2),
            rounding: RoundingUnits::default(),
        }
    }
}

impl StockPolicy {
    pub fn min_stock_for(&self, kind: ItemKind) -> Decimal {
        match kind {
            ItemKind::Elaborated => self.minimum.elaborated,
            ItemKind::Countable => self.minimum.countable,
            ItemKind::Measurable => self.minimum.measurable,
            ItemKind::Unknown => self.minimum.fallback,
        }
    }

    /// Check the invariants every calculation relies on.
    ///
    /// A ratio in `(0, 1)` keeps `critical <= minimum` for integral minima.
    pub fn validate(&self) -> CalcResult<()> {
        let minima = [
            ("minimum.measurable", self.minimum.measurable),
            ("minimum.countable", self.minimum.countable),
            ("minimum.elaborated", self.minimum.elaborated),
            ("minimum.fallback", self.minimum.fallback),
        ];
        for (field, value) in minima {
            if value <= Decimal::ZERO {
                return Err(CalcError::invalid_policy(format!("{field} must be > 0 (got {value})")));
            }
            if !value.fract().is_zero() {
                return Err(CalcError::invalid_policy(format!(
                    "{field} must be a whole number (got {value})"
                )));
            }
        }

        if self.critical_ratio <= Decimal::ZERO || self.critical_ratio >= Decimal::ONE {
            return Err(CalcError::invalid_policy(format!(
                "critical_ratio must be in (0, 1) (got {})",
                self.critical_ratio
            )));
        }

        if self.reorder_multiplier <= Decimal::ZERO {
            return Err(CalcError::invalid_policy(format!(
                "reorder_multiplier must be > 0 (got {})",
                self.reorder_multiplier
            )));
        }

        let units = [
            ("rounding.elaborated", self.rounding.elaborated),
            ("rounding.fallback", self.rounding.fallback),
        ];
        for (field, value) in units {
            if value <= Decimal::ZERO {
                return Err(CalcError::invalid_policy(format!("{field} must be > 0 (got {value})")));
            }
        }

        Ok(())
    }
}
