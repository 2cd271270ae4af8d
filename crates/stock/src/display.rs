//! Display-unit resolution and packaging checks for the presentation layer.

use thiserror::Error;

use crate::item::{ItemKind, MaterialItem};

pub const DEFAULT_MEASURABLE_UNIT: &str = "kg";
pub const DEFAULT_COUNTABLE_UNIT: &str = "unidad";
pub const DEFAULT_ELABORATED_UNIT: &str = "porción";

/// Unit an item's quantities are shown in.
pub fn display_unit(item: &MaterialItem) -> &str {
    match item.kind {
        ItemKind::Measurable => item.unit().unwrap_or(DEFAULT_MEASURABLE_UNIT),
        ItemKind::Countable => item
            .packaging
            .as_ref()
            .map(|p| p.package_unit.trim())
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_COUNTABLE_UNIT),
        ItemKind::Elaborated => item.unit().unwrap_or(DEFAULT_ELABORATED_UNIT),
        ItemKind::Unknown => DEFAULT_COUNTABLE_UNIT,
    }
}

/// Malformed packaging on a countable item.
///
/// Reorder rounding silently falls back to the generic unit in these cases;
/// this lets the inventory layer warn whoever configured the item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackagingIssue {
    #[error("package size must be positive (got {0})")]
    NonPositiveSize(f64),

    #[error("package size is not a finite number")]
    NonFiniteSize,

    #[error("package unit is blank")]
    BlankUnit,
}

/// Check a countable item's packaging. Items without packaging, or of another
/// kind, have nothing to check.
pub fn validate_packaging(item: &MaterialItem) -> Result<(), PackagingIssue> {
    let Some(packaging) = item.effective_packaging() else {
        return Ok(());
    };
    if !packaging.package_size.is_finite() {
        return Err(PackagingIssue::NonFiniteSize);
    }
    if packaging.package_size <= 0.0 {
        return Err(PackagingIssue::NonPositiveSize(packaging.package_size));
    }
    if packaging.package_unit.trim().is_empty() {
        return Err(PackagingIssue::BlankUnit);
    }
    Ok(())
}
