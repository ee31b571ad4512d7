//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier are the same entity, whatever their
/// other attributes say. Implementors are expected to base `PartialEq` and
/// `Hash` on [`Entity::id`] alone.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
