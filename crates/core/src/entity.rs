//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by its key, not its attribute values: two entities
/// with the same id are the same entity, whatever else changed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
