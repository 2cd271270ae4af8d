//! `StockEngine`: a policy and a diagnostic sink bundled behind the calculation
//! API.

use rust_decimal::Decimal;

use bistro_core::CalcResult;

use crate::collection::{self, ReorderLine, StatusBuckets, StockStatistics};
use crate::display;
use crate::item::MaterialItem;
use crate::policy::StockPolicy;
use crate::reorder;
use crate::sink::{DiagnosticSink, TracingSink};
use crate::status::{self, StockStatus};
use crate::thresholds;
use crate::valuation;

/// Stateless calculator. Cheap to build; safe to share across threads when
/// the sink is.
#[derive(Debug, Clone)]
pub struct StockEngine<S = TracingSink> {
    policy: StockPolicy,
    sink: S,
}

impl Default for StockEngine<TracingSink> {
    fn default() -> Self {
        Self {
            policy: StockPolicy::default(),
            sink: TracingSink,
        }
    }
}

impl StockEngine<TracingSink> {
    /// Engine with a custom policy, validated up front.
    pub fn with_policy(policy: StockPolicy) -> CalcResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            sink: TracingSink,
        })
    }
}

impl<S: DiagnosticSink> StockEngine<S> {
    pub fn new(policy: StockPolicy, sink: S) -> CalcResult<Self> {
        policy.validate()?;
        Ok(Self { policy, sink })
    }

    /// Swap the diagnostic sink, keeping the policy.
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> StockEngine<T> {
        StockEngine {
            policy: self.policy,
            sink,
        }
    }

    pub fn policy(&self) -> &StockPolicy {
        &self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn min_stock(&self, item: &MaterialItem) -> Decimal {
        thresholds::min_stock(&self.policy, item)
    }

    pub fn critical_stock(&self, item: &MaterialItem) -> Decimal {
        thresholds::critical_stock(&self.policy, item)
    }

    pub fn stock_status(&self, item: &MaterialItem) -> StockStatus {
        status::stock_status(&self.policy, item)
    }

    pub fn total_value(&self, item: &MaterialItem) -> Decimal {
        valuation::total_value(&self.sink, item)
    }

    pub fn suggested_reorder_quantity(&self, item: &MaterialItem) -> Decimal {
        reorder::suggested_reorder_quantity(&self.sink, &self.policy, item)
    }

    pub fn needs_reordering(&self, item: &MaterialItem) -> bool {
        self.stock_status(item).is_reorder_candidate()
    }

    pub fn reorder_priority(&self, item: &MaterialItem) -> u8 {
        self.stock_status(item).priority()
    }

    pub fn display_unit<'a>(&self, item: &'a MaterialItem) -> &'a str {
        display::display_unit(item)
    }

    pub fn filter_by_status<'a>(
        &self,
        items: &'a [MaterialItem],
        status: StockStatus,
    ) -> Vec<&'a MaterialItem> {
        collection::filter_by_status(&self.policy, items, status)
    }

    pub fn low_stock_items<'a>(&self, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
        collection::low_stock_items(&self.policy, items)
    }

    pub fn critical_stock_items<'a>(&self, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
        collection::critical_stock_items(&self.policy, items)
    }

    pub fn out_of_stock_items<'a>(&self, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
        collection::out_of_stock_items(&self.policy, items)
    }

    pub fn partition_by_status<'a>(&self, items: &'a [MaterialItem]) -> StatusBuckets<'a> {
        collection::partition_by_status(&self.policy, items)
    }

    pub fn statistics(&self, items: &[MaterialItem]) -> StockStatistics {
        collection::statistics(&self.sink, &self.policy, items)
    }

    pub fn sort_by_priority<'a>(&self, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
        collection::sort_by_priority(&self.policy, items)
    }

    pub fn reorder_plan(&self, items: &[MaterialItem]) -> Vec<ReorderLine> {
        collection::reorder_plan(&self.sink, &self.policy, items)
    }
}

// Default-policy shortcuts for callers that don't configure anything.

pub fn min_stock(item: &MaterialItem) -> Decimal {
    StockEngine::default().min_stock(item)
}

pub fn critical_stock(item: &MaterialItem) -> Decimal {
    StockEngine::default().critical_stock(item)
}

pub fn stock_status(item: &MaterialItem) -> StockStatus {
    StockEngine::default().stock_status(item)
}

pub fn total_value(item: &MaterialItem) -> Decimal {
    StockEngine::default().total_value(item)
}

pub fn suggested_reorder_quantity(item: &MaterialItem) -> Decimal {
    StockEngine::default().suggested_reorder_quantity(item)
}

pub fn needs_reordering(item: &MaterialItem) -> bool {
    StockEngine::default().needs_reordering(item)
}

pub fn reorder_priority(item: &MaterialItem) -> u8 {
    StockEngine::default().reorder_priority(item)
}

pub fn filter_by_status(items: &[MaterialItem], status: StockStatus) -> Vec<&MaterialItem> {
    StockEngine::default().filter_by_status(items, status)
}

pub fn low_stock_items(items: &[MaterialItem]) -> Vec<&MaterialItem> {
    StockEngine::default().low_stock_items(items)
}

pub fn critical_stock_items(items: &[MaterialItem]) -> Vec<&MaterialItem> {
    StockEngine::default().critical_stock_items(items)
}

pub fn out_of_stock_items(items: &[MaterialItem]) -> Vec<&MaterialItem> {
    StockEngine::default().out_of_stock_items(items)
}

pub fn statistics(items: &[MaterialItem]) -> StockStatistics {
    StockEngine::default().statistics(items)
}
