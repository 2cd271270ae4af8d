//! Monetary value of an item's stock.

use rust_decimal::Decimal;
use tracing::Level;

use bistro_core::{CalcError, CalcResult};

use crate::decimal::to_decimal;
use crate::item::MaterialItem;
use crate::sink::{DiagnosticContext, DiagnosticSink};

const OPERATION: &str = "total_value";

/// `stock * unit_cost` in decimal arithmetic.
///
/// Never fails: a missing cost counts as zero, and any input the decimal type
/// cannot represent (NaN, infinities, out-of-range magnitudes, overflowing
/// products) is reported to `sink` and valued at `0` so one corrupt record
/// cannot take down a batch valuation.
pub fn total_value<S>(sink: &S, item: &MaterialItem) -> Decimal
where
    S: DiagnosticSink + ?Sized,
{
    match try_total_value(item) {
        Ok(value) => value,
        Err(err) => {
            let message = if err.is_non_finite() {
                "non-finite stock value; falling back to zero"
            } else {
                "stock value calculation failed; falling back to zero"
            };
            let context = DiagnosticContext::new(OPERATION, item.id.clone(), item.stock)
                .with_raw_cost(item.unit_cost)
                .with_error(err.to_string());
            sink.log(Level::WARN, message, &context);
            Decimal::ZERO
        }
    }
}

fn try_total_value(item: &MaterialItem) -> CalcResult<Decimal> {
    let stock = to_decimal(item.stock)?;
    let cost = to_decimal(item.unit_cost.unwrap_or(0.0))?;
    stock
        .checked_mul(cost)
        .ok_or_else(|| CalcError::overflow(format!("{stock} * {cost}")))
}
