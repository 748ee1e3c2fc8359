//! Tenant-partitioned storage contract.
//!
//! Records live in per-tenant partitions keyed by [`MasterId`]; an entity id
//! is unique only within its partition, and no operation ever reads or
//! writes outside the partition named in the call. The same contract must
//! hold if a durable backend is substituted for the in-memory store.

use std::sync::Arc;

use classhub_core::{DomainResult, Entity, EntityId, MasterId};

mod in_memory;

pub use in_memory::InMemoryTenantStore;

/// Page window for `find_all`.
///
/// The store never validates these values (that is a collaborator's job):
/// negative or out-of-range quantity/offset degrade gracefully to an empty
/// or clipped slice, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    pub quantity: Option<i64>,
    pub offset: Option<i64>,
}

impl Page {
    pub const DEFAULT_QUANTITY: usize = 10;

    pub fn new(quantity: impl Into<Option<i64>>, offset: impl Into<Option<i64>>) -> Self {
        Self {
            quantity: quantity.into(),
            offset: offset.into(),
        }
    }

    /// Resolve to a `(offset, quantity)` window, clamping negatives to zero
    /// and applying the default quantity of 10.
    pub fn window(&self) -> (usize, usize) {
        let offset = self.offset.unwrap_or(0).max(0) as usize;
        let quantity = match self.quantity {
            Some(q) => q.max(0) as usize,
            None => Self::DEFAULT_QUANTITY,
        };
        (offset, quantity)
    }
}

/// Tenant-isolated store abstraction over an entity type `T`.
///
/// The tenant is passed explicitly on every call rather than stored on the
/// entity, keeping the store tenant-agnostic and testable. Entities handed
/// out are detached copies: mutating one never changes the store until an
/// explicit `update`/`mutate` persists it.
pub trait TenantStore<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    /// Look up a record in that tenant's partition; never searches others.
    fn find(&self, master_id: &MasterId, id: &EntityId) -> Option<T>;

    /// Insertion-ordered window `[offset, offset + quantity)` of that
    /// tenant's partition.
    fn find_all(&self, master_id: &MasterId, page: Page) -> Vec<T>;

    /// Insert a new record; `DomainError::Duplicate` if the id already
    /// exists in that partition. The partition is created lazily on first
    /// write.
    fn create(&self, master_id: &MasterId, entity: T) -> DomainResult<EntityId>;

    /// Replace an existing record in place (insertion order is kept);
    /// `DomainError::NotFound` if the id is absent from that partition.
    fn update(&self, master_id: &MasterId, entity: T) -> DomainResult<T>;

    /// Remove a record from that tenant's partition only;
    /// `DomainError::NotFound` if absent.
    fn delete(&self, master_id: &MasterId, id: &EntityId) -> DomainResult<()>;

    /// Apply `op` to a working copy of the record under the partition's
    /// write lock, committing only when `op` returns `Ok`.
    ///
    /// This is the atomicity boundary for batch list mutations: an `Err`
    /// from any element leaves the stored record exactly as it was before
    /// the call, and no concurrent caller ever observes a partial
    /// application.
    fn mutate(
        &self,
        master_id: &MasterId,
        id: &EntityId,
        op: &mut dyn FnMut(&mut T) -> DomainResult<()>,
    ) -> DomainResult<T>;
}

impl<T, S> TenantStore<T> for Arc<S>
where
    T: Entity + Send + Sync + 'static,
    S: TenantStore<T> + ?Sized,
{
    fn find(&self, master_id: &MasterId, id: &EntityId) -> Option<T> {
        (**self).find(master_id, id)
    }

    fn find_all(&self, master_id: &MasterId, page: Page) -> Vec<T> {
        (**self).find_all(master_id, page)
    }

    fn create(&self, master_id: &MasterId, entity: T) -> DomainResult<EntityId> {
        (**self).create(master_id, entity)
    }

    fn update(&self, master_id: &MasterId, entity: T) -> DomainResult<T> {
        (**self).update(master_id, entity)
    }

    fn delete(&self, master_id: &MasterId, id: &EntityId) -> DomainResult<()> {
        (**self).delete(master_id, id)
    }

    fn mutate(
        &self,
        master_id: &MasterId,
        id: &EntityId,
        op: &mut dyn FnMut(&mut T) -> DomainResult<()>,
    ) -> DomainResult<T> {
        (**self).mutate(master_id, id, op)
    }
}
