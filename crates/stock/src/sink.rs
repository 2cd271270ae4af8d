//! Diagnostic side channel for the otherwise pure calculations.
//!
//! Calculations never fail; when one falls back to a safe value it reports the
//! anomaly here. The sink is injected so callers (and tests) decide where the
//! entries end up.

use tracing::Level;

use bistro_core::ItemId;

/// Component tag attached to every entry emitted by this crate.
pub const COMPONENT: &str = "inventory";

/// Structured context for a diagnostic entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticContext {
    pub component: &'static str,
    pub operation: &'static str,
    pub item_id: ItemId,
    pub raw_stock: f64,
    pub raw_cost: Option<f64>,
    /// Underlying error message, when the fallback was caused by one.
    pub error: Option<String>,
}

impl DiagnosticContext {
    pub fn new(operation: &'static str, item_id: ItemId, raw_stock: f64) -> Self {
        Self {
            component: COMPONENT,
            operation,
            item_id,
            raw_stock,
            raw_cost: None,
            error: None,
        }
    }

    pub fn with_raw_cost(mut self, raw_cost: Option<f64>) -> Self {
        self.raw_cost = raw_cost;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Synchronous, infallible log capability.
///
/// Implementations must not block for long and must not panic: they run inside
/// value calculations.
pub trait DiagnosticSink {
    fn log(&self, level: Level, message: &str, context: &DiagnosticContext);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn log(&self, level: Level, message: &str, context: &DiagnosticContext) {
        (**self).log(level, message, context);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn log(&self, level: Level, message: &str, context: &DiagnosticContext) {
        (**self).log(level, message, context);
    }
}

/// Default sink: forwards entries to `tracing`.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: Level, message: &str, context: &DiagnosticContext) {
        let item_id = context.item_id.as_str();
        let error = context.error.as_deref().unwrap_or("");
        // `tracing` needs the level at compile time.
        match level {
            Level::ERROR => tracing::error!(
                component = context.component,
                operation = context.operation,
                item_id,
                raw_stock = context.raw_stock,
                raw_cost = ?context.raw_cost,
                error,
                "{message}"
            ),
            Level::WARN => tracing::warn!(
                component = context.component,
                operation = context.operation,
                item_id,
                raw_stock = context.raw_stock,
                raw_cost = ?context.raw_cost,
                error,
                "{message}"
            ),
            Level::INFO => tracing::info!(
                component = context.component,
                operation = context.operation,
                item_id,
                raw_stock = context.raw_stock,
                raw_cost = ?context.raw_cost,
                error,
                "{message}"
            ),
            _ => tracing::debug!(
                component = context.component,
                operation = context.operation,
                item_id,
                raw_stock = context.raw_stock,
                raw_cost = ?context.raw_cost,
                error,
                "{message}"
            ),
        }
    }
}

/// Sink that drops every entry.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn log(&self, _level: Level, _message: &str, _context: &DiagnosticContext) {}
}
