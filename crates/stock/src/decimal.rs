//! Conversions between raw upstream numbers and `Decimal`.
//!
//! All money and fractional stock math runs on `rust_decimal::Decimal`; `f64`
//! only appears at the input boundary.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use bistro_core::{CalcError, CalcResult};

/// Convert a raw number to a decimal via its shortest round-trip text form,
/// so `0.111111` becomes exactly `0.111111` rather than its binary expansion.
pub fn to_decimal(value: f64) -> CalcResult<Decimal> {
    if !value.is_finite() {
        return Err(CalcError::non_finite(value));
    }
    Decimal::from_str(&value.to_string())
        .map_err(|e| CalcError::decimal_conversion(format!("{value}: {e}")))
}

/// Round half away from zero to two decimal places, keeping the scale at 2
/// so `22.8` renders as `22.80`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// `ceil(value / step) * step`. Callers guarantee `step > 0`.
pub fn round_up_to_multiple(value: Decimal, step: Decimal) -> CalcResult<Decimal> {
    let packages = value
        .checked_div(step)
        .ok_or_else(|| CalcError::overflow(format!("{value} / {step}")))?
        .ceil();
    packages
        .checked_mul(step)
        .ok_or_else(|| CalcError::overflow(format!("{packages} * {step}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_short_decimal_form() {
        assert_eq!(to_decimal(0.111111).unwrap(), dec!(0.111111));
        assert_eq!(to_decimal(-5.0).unwrap(), dec!(-5));
        assert_eq!(to_decimal(0.001).unwrap(), dec!(0.001));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(to_decimal(f64::NAN), Err(CalcError::NonFinite(_))));
        assert!(matches!(to_decimal(f64::INFINITY), Err(CalcError::NonFinite(_))));
        assert!(matches!(to_decimal(f64::NEG_INFINITY), Err(CalcError::NonFinite(_))));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(to_decimal(1e300), Err(CalcError::DecimalConversion(_))));
    }

    #[test]
    fn money_rounds_half_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_money(dec!(22.8)).to_string(), "22.80");
    }

    #[test]
    fn rounds_up_to_step() {
        assert_eq!(round_up_to_multiple(dec!(17), dec!(12)).unwrap(), dec!(24));
        assert_eq!(round_up_to_multiple(dec!(28), dec!(10)).unwrap(), dec!(30));
        assert_eq!(round_up_to_multiple(dec!(30), dec!(10)).unwrap(), dec!(30));
        assert_eq!(round_up_to_multiple(dec!(0.7), dec!(0.5)).unwrap(), dec!(1.0));
    }
}
