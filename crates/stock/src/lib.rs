//! Stock calculation engine.
//!
//! Pure functions over read-only [`MaterialItem`] records: threshold
//! resolution, status classification, decimal valuation, reorder planning and
//! batch statistics. No IO; the only side channel is the injected
//! [`DiagnosticSink`] used when a valuation falls back to zero.

pub mod collection;
pub mod decimal;
pub mod display;
pub mod engine;
pub mod item;
pub mod policy;
pub mod reorder;
pub mod sink;
pub mod status;
pub mod thresholds;
pub mod valuation;

pub use collection::{ReorderLine, StatusBuckets, StockStatistics};
pub use display::{PackagingIssue, display_unit, validate_packaging};
pub use engine::{
    StockEngine, critical_stock, critical_stock_items, filter_by_status, low_stock_items,
    min_stock, needs_reordering, out_of_stock_items, reorder_priority, statistics, stock_status,
    suggested_reorder_quantity, total_value,
};
pub use item::{ItemKind, MaterialItem, Packaging};
pub use policy::StockPolicy;
pub use sink::{DiagnosticContext, DiagnosticSink, NoopSink, TracingSink};
pub use status::{StockStatus, UnknownStatus, status_color, status_label};

pub use rust_decimal::Decimal;
