//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the store has assigned an identity yet.
    ///
    /// Entities whose identity is allocated by persistence start out transient
    /// and become persisted once written.
    fn is_persisted(&self) -> bool;
}
