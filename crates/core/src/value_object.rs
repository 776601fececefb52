//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A `Currency` or a month-to-units sales table is a value
//! object, a `Product` is an entity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build a
/// new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price { amount: f64, currency: Currency }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
