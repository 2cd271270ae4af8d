//! Stock status classification and the per-status metadata that goes with it.

use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use bistro_core::ValueObject;

use crate::item::MaterialItem;
use crate::policy::StockPolicy;
use crate::thresholds::{critical_stock, min_stock};

/// Derived stock level of an item.
///
/// Variants are declared in increasing severity, so `Ord` ranks
/// `Out > Critical > Low > Ok`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Ok,
    Low,
    Critical,
    Out,
}

impl ValueObject for StockStatus {}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::Ok,
        StockStatus::Low,
        StockStatus::Critical,
        StockStatus::Out,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ok => "ok",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
            StockStatus::Out => "out",
        }
    }

    /// Anything below `Ok` should be replenished.
    pub fn is_reorder_candidate(&self) -> bool {
        !matches!(self, StockStatus::Ok)
    }

    /// Urgency used for sorting and display bucketing.
    ///
    /// `2` is unassigned; consumers bucket on these exact values.
    pub fn priority(&self) -> u8 {
        match self {
            StockStatus::Out => 5,
            StockStatus::Critical => 4,
            StockStatus::Low => 3,
            StockStatus::Ok => 1,
        }
    }

    /// Presentation token consumed by the UI layer.
    pub fn color(&self) -> &'static str {
        match self {
            StockStatus::Ok => "green",
            StockStatus::Low => "yellow",
            StockStatus::Critical => "orange",
            StockStatus::Out => "red",
        }
    }

    /// Localized label consumed by the UI layer.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "Normal",
            StockStatus::Low => "Stock bajo",
            StockStatus::Critical => "Stock crítico",
            StockStatus::Out => "Sin stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a raw status string is not one of the four statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stock status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for StockStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(StockStatus::Ok),
            "low" => Ok(StockStatus::Low),
            "critical" => Ok(StockStatus::Critical),
            "out" => Ok(StockStatus::Out),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Color token fallback for statuses that are not recognised.
pub const UNKNOWN_STATUS_COLOR: &str = "gray";
/// Label fallback for statuses that are not recognised.
pub const UNKNOWN_STATUS_LABEL: &str = "Desconocido";

/// Color token for a raw status string, with an explicit default.
pub fn status_color(raw: &str) -> &'static str {
    raw.parse::<StockStatus>()
        .map(|s| s.color())
        .unwrap_or(UNKNOWN_STATUS_COLOR)
}

/// Label for a raw status string, with an explicit default.
pub fn status_label(raw: &str) -> &'static str {
    raw.parse::<StockStatus>()
        .map(|s| s.label())
        .unwrap_or(UNKNOWN_STATUS_LABEL)
}

/// Classify current stock against the item's thresholds.
///
/// First match wins and every comparison is non-strict: stock equal to the
/// critical level is `Critical`, equal to the minimum is `Low`. A NaN stock
/// matches no comparison and would fall through to `Ok` under a literal
/// reading of the rules; it is treated as unknown and reported `Out` instead.
pub fn stock_status(policy: &StockPolicy, item: &MaterialItem) -> StockStatus {
    let stock = item.stock;
    if stock.is_nan() || stock <= 0.0 {
        return StockStatus::Out;
    }
    if stock <= threshold_f64(critical_stock(policy, item)) {
        return StockStatus::Critical;
    }
    if stock <= threshold_f64(min_stock(policy, item)) {
        return StockStatus::Low;
    }
    StockStatus::Ok
}

// Thresholds are small whole numbers, exactly representable as f64.
fn threshold_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
