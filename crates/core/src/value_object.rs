//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attributes are the same value. To "modify" one,
/// construct a new one (which re-runs validation).
///
/// - `Money { amount: 100, currency: "USD" }` is a value object
/// - `Lesson { id: EntityId(...), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
