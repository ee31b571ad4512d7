//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are immutable: two instances holding the
/// same values are interchangeable. Product categories are the canonical
/// example in this workspace, while product records are entities (see
/// [`crate::Entity`]).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Category { Tools, Toys }
///
/// impl ValueObject for Category {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
