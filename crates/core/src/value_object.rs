//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Derived results
/// of the engine (statuses, statistics, packaging definitions) are value
/// objects: two results computed from the same items are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Packaging {
///     package_size: f64,
///     package_unit: String,
/// }
///
/// impl ValueObject for Packaging {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
