//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry data between layers and are compared by their fields.
/// They are never mutated after construction; to "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct GetByCategory {
///     category: i32,
/// }
///
/// impl ValueObject for GetByCategory {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
