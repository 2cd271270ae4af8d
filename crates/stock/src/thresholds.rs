//! Minimum and critical stock levels per item.

use rust_decimal::Decimal;

use crate::item::MaterialItem;
use crate::policy::StockPolicy;

/// Minimum stock for the item's kind.
pub fn min_stock(policy: &StockPolicy, item: &MaterialItem) -> Decimal {
    policy.min_stock_for(item.kind)
}

/// `ceil(min_stock * critical_ratio)`.
///
/// Always rounded up so the critical level never under-reports risk.
pub fn critical_stock(policy: &StockPolicy, item: &MaterialItem) -> Decimal {
    let min = min_stock(policy, item);
    min.checked_mul(policy.critical_ratio)
        .map(|v| v.ceil())
        // Unreachable for validated policies; the minimum is the safe upper bound.
        .unwrap_or(min)
}
