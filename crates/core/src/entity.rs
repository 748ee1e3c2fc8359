//! Entity trait: identity + continuity across state changes.

use crate::id::EntityId;
use crate::lifecycle::EntityLifecycle;

/// Entity marker + minimal interface.
///
/// Every domain entity is identified by an [`EntityId`] (unique within its
/// tenant partition) and carries an [`EntityLifecycle`]. The `Clone` bound is
/// load-bearing: stores hand out detached copies, never live references.
pub trait Entity: Clone + core::fmt::Debug {
    /// Returns the entity identifier.
    fn id(&self) -> &EntityId;

    /// Returns the entity's lifecycle status.
    fn lifecycle(&self) -> &EntityLifecycle;
}
