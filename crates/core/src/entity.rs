//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stock items are entities owned by the inventory data layer; the engine only
/// reads them.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
