//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// To "modify" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(1500), Price(1500));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
