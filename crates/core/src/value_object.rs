//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity; they are defined entirely by their
//! attribute values. Amounts, quantities and identifiers are all value objects.

/// Marker trait for value objects.
///
/// Implementors are **immutable** and **compared by value**. Operations that
/// would "modify" a value object return a new instance instead, which makes
/// them safe to share across threads without locking.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price {
///     minor_units: i64,
///     currency_id: u32,
/// }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
