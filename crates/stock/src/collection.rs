//! Batch operations: status filters, partitions, fleet statistics and the
//! reorder plan.
//!
//! Everything here is a single pass over the input, keeps input order where it
//! returns items, and is safe on an empty slice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::Level;

use bistro_core::{ItemId, ValueObject};

use crate::decimal::{round_money, to_decimal};
use crate::display::display_unit;
use crate::item::{ItemKind, MaterialItem};
use crate::policy::StockPolicy;
use crate::reorder::suggested_reorder_quantity;
use crate::sink::{DiagnosticContext, DiagnosticSink};
use crate::status::{StockStatus, stock_status};
use crate::valuation::total_value;

fn filter_where<'a>(
    policy: &StockPolicy,
    items: &'a [MaterialItem],
    keep: impl Fn(StockStatus) -> bool,
) -> Vec<&'a MaterialItem> {
    items
        .iter()
        .filter(|item| keep(stock_status(policy, item)))
        .collect()
}

/// Items whose status equals `status`, in input order.
pub fn filter_by_status<'a>(
    policy: &StockPolicy,
    items: &'a [MaterialItem],
    status: StockStatus,
) -> Vec<&'a MaterialItem> {
    filter_where(policy, items, |s| s == status)
}

/// `Low` or `Critical`.
pub fn low_stock_items<'a>(policy: &StockPolicy, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
    filter_where(policy, items, |s| matches!(s, StockStatus::Low | StockStatus::Critical))
}

/// `Critical` or `Out`.
pub fn critical_stock_items<'a>(
    policy: &StockPolicy,
    items: &'a [MaterialItem],
) -> Vec<&'a MaterialItem> {
    filter_where(policy, items, |s| matches!(s, StockStatus::Critical | StockStatus::Out))
}

pub fn out_of_stock_items<'a>(
    policy: &StockPolicy,
    items: &'a [MaterialItem],
) -> Vec<&'a MaterialItem> {
    filter_by_status(policy, items, StockStatus::Out)
}

/// Items grouped by status, each bucket in input order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatusBuckets<'a> {
    pub ok: Vec<&'a MaterialItem>,
    pub low: Vec<&'a MaterialItem>,
    pub critical: Vec<&'a MaterialItem>,
    pub out: Vec<&'a MaterialItem>,
}

impl<'a> StatusBuckets<'a> {
    pub fn get(&self, status: StockStatus) -> &[&'a MaterialItem] {
        match status {
            StockStatus::Ok => &self.ok,
            StockStatus::Low => &self.low,
            StockStatus::Critical => &self.critical,
            StockStatus::Out => &self.out,
        }
    }
}

pub fn partition_by_status<'a>(policy: &StockPolicy, items: &'a [MaterialItem]) -> StatusBuckets<'a> {
    let mut buckets = StatusBuckets::default();
    for item in items {
        match stock_status(policy, item) {
            StockStatus::Ok => buckets.ok.push(item),
            StockStatus::Low => buckets.low.push(item),
            StockStatus::Critical => buckets.critical.push(item),
            StockStatus::Out => buckets.out.push(item),
        }
    }
    buckets
}

/// Fleet-wide summary of a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatistics {
    pub total: usize,
    pub ok: usize,
    pub low: usize,
    pub critical: usize,
    pub out: usize,
    /// Sum of item values, rounded to 2 dp once at the end.
    pub total_value: Decimal,
    /// Mean of raw stock, rounded to 2 dp. Zero for an empty batch.
    pub average_stock: Decimal,
}

impl ValueObject for StockStatistics {}

impl StockStatistics {
    pub fn count(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::Ok => self.ok,
            StockStatus::Low => self.low,
            StockStatus::Critical => self.critical,
            StockStatus::Out => self.out,
        }
    }

    /// Items that need reordering.
    pub fn needs_attention(&self) -> usize {
        self.low + self.critical + self.out
    }
}

/// Counts per status, total value and average stock in one pass.
///
/// Values come from [`total_value`], so corrupt items contribute zero and are
/// reported to `sink` rather than failing the batch. Stock the decimal type
/// cannot represent is reported too and counted as zero in the average. An
/// item whose value or stock would overflow a running sum is reported and its
/// contribution to that sum is dropped; it still counts toward `total`.
pub fn statistics<S>(sink: &S, policy: &StockPolicy, items: &[MaterialItem]) -> StockStatistics
where
    S: DiagnosticSink + ?Sized,
{
    let mut stats = StockStatistics::default();
    let mut value_sum = Decimal::ZERO;
    let mut stock_sum = Decimal::ZERO;

    for item in items {
        stats.total += 1;
        match stock_status(policy, item) {
            StockStatus::Ok => stats.ok += 1,
            StockStatus::Low => stats.low += 1,
            StockStatus::Critical => stats.critical += 1,
            StockStatus::Out => stats.out += 1,
        }

        let value = total_value(sink, item);
        match value_sum.checked_add(value) {
            Some(sum) => value_sum = sum,
            None => report_excluded(
                sink,
                item,
                "value excluded from total: sum overflow",
                format!("overflow: {value_sum} + {value}"),
            ),
        }

        match to_decimal(item.stock) {
            Ok(stock) => match stock_sum.checked_add(stock) {
                Some(sum) => stock_sum = sum,
                None => report_excluded(
                    sink,
                    item,
                    "stock excluded from average: sum overflow",
                    format!("overflow: {stock_sum} + {stock}"),
                ),
            },
            Err(err) => {
                report_excluded(sink, item, "stock excluded from average", err.to_string())
            }
        }
    }

    if stats.total == 0 {
        return stats;
    }

    stats.total_value = round_money(value_sum);
    stats.average_stock = stock_sum
        .checked_div(Decimal::from(stats.total))
        .map(round_money)
        .unwrap_or(Decimal::ZERO);
    stats
}

fn report_excluded<S>(sink: &S, item: &MaterialItem, message: &str, error: String)
where
    S: DiagnosticSink + ?Sized,
{
    let context = DiagnosticContext::new("statistics", item.id.clone(), item.stock)
        .with_raw_cost(item.unit_cost)
        .with_error(error);
    sink.log(Level::WARN, message, &context);
}

/// Items ordered most urgent first. Ties keep input order.
pub fn sort_by_priority<'a>(policy: &StockPolicy, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
    let mut ranked: Vec<(u8, &MaterialItem)> = items
        .iter()
        .map(|item| (stock_status(policy, item).priority(), item))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, item)| item).collect()
}

/// One line of a reorder plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderLine {
    pub item_id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub status: StockStatus,
    pub priority: u8,
    pub quantity: Decimal,
    pub unit: String,
}

/// Every item that needs reordering with its suggested quantity, most urgent
/// first.
pub fn reorder_plan<S>(sink: &S, policy: &StockPolicy, items: &[MaterialItem]) -> Vec<ReorderLine>
where
    S: DiagnosticSink + ?Sized,
{
    sort_by_priority(policy, items)
        .into_iter()
        .filter_map(|item| {
            let status = stock_status(policy, item);
            if !status.is_reorder_candidate() {
                return None;
            }
            Some(ReorderLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                kind: item.kind,
                status,
                priority: status.priority(),
                quantity: suggested_reorder_quantity(sink, policy, item),
                unit: display_unit(item).to_string(),
            })
        })
        .collect()
}
