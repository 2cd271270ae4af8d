//! Calculation error model.

use thiserror::Error;

/// Result type used across the calculation layer.
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculation-level error.
///
/// These never escape a stock calculation: the engine turns them into a logged
/// fallback value. They do surface from configuration and identifier parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A raw number was NaN or infinite.
    #[error("non-finite number: {0}")]
    NonFinite(String),

    /// A raw number could not be represented as a decimal.
    #[error("decimal conversion failed: {0}")]
    DecimalConversion(String),

    /// Decimal arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// A policy or configuration value failed validation.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CalcError {
    pub fn non_finite(value: f64) -> Self {
        Self::NonFinite(value.to_string())
    }

    pub fn decimal_conversion(msg: impl Into<String>) -> Self {
        Self::DecimalConversion(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn invalid_policy(msg: impl Into<String>) -> Self {
        Self::InvalidPolicy(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True when the error stems from a NaN/infinite input or result.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFinite(_) | Self::Overflow(_))
    }
}
