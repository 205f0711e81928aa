//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (a depreciation schedule, a price snapshot)
/// - **Entity**: has identity (a car with a `CarId`)
///
/// Value objects are immutable; to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Schedule { grace_secs: i64, rate: f64 }
///
/// impl ValueObject for Schedule {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
