//! Suggested replenishment quantities.

use rust_decimal::Decimal;
use tracing::Level;

use crate::decimal::{round_up_to_multiple, to_decimal};
use crate::item::{ItemKind, MaterialItem};
use crate::policy::StockPolicy;
use crate::sink::{DiagnosticContext, DiagnosticSink};
use crate::thresholds::min_stock;

const OPERATION: &str = "suggested_reorder_quantity";

/// Quantity to order so stock reaches `min_stock * reorder_multiplier`,
/// rounded up to the item's rounding unit. Always `>= 0`.
///
/// A stock the decimal type cannot represent is reported to `sink`; a positive
/// one is taken to cover the target, anything else counts as nothing on hand.
pub fn suggested_reorder_quantity<S>(sink: &S, policy: &StockPolicy, item: &MaterialItem) -> Decimal
where
    S: DiagnosticSink + ?Sized,
{
    let target = min_stock(policy, item)
        .checked_mul(policy.reorder_multiplier)
        .unwrap_or(Decimal::MAX);

    let on_hand = match to_decimal(item.stock) {
        Ok(stock) => stock,
        Err(err) => {
            let context = DiagnosticContext::new(OPERATION, item.id.clone(), item.stock)
                .with_error(err.to_string());
            sink.log(Level::WARN, "unrepresentable stock in reorder calculation", &context);
            if item.stock > 0.0 {
                // Too large to represent; covers any target.
                Decimal::MAX
            } else {
                Decimal::ZERO // nothing on hand
            }
        }
    };

    let needed = target
        .checked_sub(on_hand)
        .unwrap_or(target)
        .max(Decimal::ZERO);
    if needed.is_zero() {
        return Decimal::ZERO;
    }

    let step = rounding_unit(policy, item);
    match round_up_to_multiple(needed, step) {
        Ok(quantity) => quantity,
        Err(err) => {
            let context = DiagnosticContext::new(OPERATION, item.id.clone(), item.stock)
                .with_error(err.to_string());
            sink.log(Level::WARN, "reorder rounding overflowed; using raw deficit", &context);
            needed
        }
    }
}

/// Step the deficit is rounded up to.
///
/// Countable items use their package size when it is a positive, representable
/// number; otherwise they fall through to the generic unit like any other kind.
pub fn rounding_unit(policy: &StockPolicy, item: &MaterialItem) -> Decimal {
    match item.kind {
        ItemKind::Elaborated => policy.rounding.elaborated,
        ItemKind::Countable => item
            .effective_packaging()
            .and_then(|p| to_decimal(p.package_size).ok())
            .filter(|size| *size > Decimal::ZERO)
            .unwrap_or(policy.rounding.fallback),
        ItemKind::Measurable | ItemKind::Unknown => policy.rounding.fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Packaging;
    use crate::sink::testing::RecordingSink;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn suggest(item: &MaterialItem) -> Decimal {
        suggested_reorder_quantity(&RecordingSink::default(), &StockPolicy::default(), item)
    }

    #[test]
    fn measurable_rounds_to_ten() {
        // target 40, needed 28
        let item = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(12.0);
        assert_eq!(suggest(&item), dec!(30));
    }

    #[test]
    fn elaborated_rounds_to_five() {
        // target 10, needed 8
        let item = MaterialItem::new("e", "Salsa", ItemKind::Elaborated).with_stock(2.0);
        assert_eq!(suggest(&item), dec!(10));
    }

    #[test]
    fn countable_rounds_to_package_size() {
        // target 20, needed 17, two packages of 12
        let item = MaterialItem::new("c", "Cerveza", ItemKind::Countable)
            .with_stock(3.0)
            .with_packaging(Packaging::new(12.0, "caja"));
        assert_eq!(suggest(&item), dec!(24));
    }

    #[test]
    fn countable_with_zero_package_falls_back_to_ten() {
        let item = MaterialItem::new("c", "Cerveza", ItemKind::Countable)
            .with_stock(3.0)
            .with_packaging(Packaging::new(0.0, "caja"));
        assert_eq!(suggest(&item), dec!(20));

        let no_pack = MaterialItem::new("c", "Cerveza", ItemKind::Countable).with_stock(3.0);
        assert_eq!(suggest(&no_pack), dec!(20));

        let nan_pack = MaterialItem::new("c", "Cerveza", ItemKind::Countable)
            .with_stock(3.0)
            .with_packaging(Packaging::new(f64::NAN, "caja"));
        assert_eq!(suggest(&nan_pack), dec!(20));
    }

    #[test]
    fn unknown_kind_uses_fallbacks() {
        // min 10, target 20, needed 15 -> 20
        let item = MaterialItem::new("u", "Otro", ItemKind::Unknown).with_stock(5.0);
        assert_eq!(suggest(&item), dec!(20));
    }

    #[test]
    fn no_reorder_above_target() {
        let item = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(500.0);
        assert_eq!(suggest(&item), Decimal::ZERO);
        let exact = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(40.0);
        assert_eq!(suggest(&exact), Decimal::ZERO);
    }

    #[test]
    fn negative_stock_increases_deficit() {
        // target 40, needed 45 -> 50
        let item = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(-5.0);
        assert_eq!(suggest(&item), dec!(50));
    }

    #[test]
    fn fractional_package_size() {
        // target 20, needed 19.3 -> 39 half-units = 19.5
        let item = MaterialItem::new("c", "Pan", ItemKind::Countable)
            .with_stock(0.7)
            .with_packaging(Packaging::new(0.5, "media"));
        assert_eq!(suggest(&item), dec!(19.5));
    }

    #[test]
    fn unrepresentable_stock_is_logged() {
        let sink = RecordingSink::default();
        let policy = StockPolicy::default();

        let nan = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(f64::NAN);
        assert_eq!(suggested_reorder_quantity(&sink, &policy, &nan), dec!(40));

        let huge = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(f64::INFINITY);
        assert_eq!(suggested_reorder_quantity(&sink, &policy, &huge), Decimal::ZERO);

        let too_big = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(1e300);
        assert_eq!(suggested_reorder_quantity(&sink, &policy, &too_big), Decimal::ZERO);

        let below = MaterialItem::new("m", "Harina", ItemKind::Measurable).with_stock(f64::NEG_INFINITY);
        assert_eq!(suggested_reorder_quantity(&sink, &policy, &below), dec!(40));

        let entries = sink.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].2.operation, "suggested_reorder_quantity");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: suggestion is non-negative, a multiple of the rounding unit,
        /// and covers the deficit.
        #[test]
        fn suggestion_covers_deficit(
            stock in -50i64..100i64,
            kind_idx in 0usize..4usize,
            package in 0u32..25u32,
        ) {
            let kinds = [ItemKind::Measurable, ItemKind::Countable, ItemKind::Elaborated, ItemKind::Unknown];
            let policy = StockPolicy::default();
            let item = MaterialItem::new("p", "prop", kinds[kind_idx])
                .with_stock(stock as f64)
                .with_packaging(Packaging::new(package as f64, "pack"));

            let quantity = suggest(&item);
            prop_assert!(quantity >= Decimal::ZERO);

            let target = min_stock(&policy, &item) * policy.reorder_multiplier;
            let needed = (target - Decimal::from(stock)).max(Decimal::ZERO);
            prop_assert!(quantity >= needed);

            let step = rounding_unit(&policy, &item);
            prop_assert!((quantity % step).is_zero());
            prop_assert!(quantity - needed < step);
        }
    }
}
