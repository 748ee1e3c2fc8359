use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, MasterId};

use super::{Page, TenantStore};

/// One tenant's records, in insertion order.
#[derive(Debug)]
struct PartitionInner<T> {
    order: Vec<EntityId>,
    records: HashMap<EntityId, T>,
}

impl<T> Default for PartitionInner<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

type Partition<T> = Arc<RwLock<PartitionInner<T>>>;

/// In-memory tenant-partitioned store.
///
/// The outer map only resolves `MasterId` → partition (read-mostly; write
/// locked just long enough to create a partition lazily). Each partition
/// carries its own lock, so callers in different tenants never contend and
/// mutations of the same record are mutually exclusive. No lock is held
/// across anything but the map operation itself.
#[derive(Debug)]
pub struct InMemoryTenantStore<T> {
    partitions: RwLock<HashMap<MasterId, Partition<T>>>,
}

impl<T> InMemoryTenantStore<T> {
    pub fn new() -> Self {
        Self {
            partitions: RwLock::new(HashMap::new()),
        }
    }

    fn partition(&self, master_id: &MasterId) -> Option<Partition<T>> {
        let map = self.partitions.read().ok()?;
        map.get(master_id).cloned()
    }

    fn partition_or_create(&self, master_id: &MasterId) -> DomainResult<Partition<T>> {
        // Read-mostly fast path: the write lock is only taken the first time
        // a tenant is seen, so creates in unrelated tenants never serialize.
        if let Some(partition) = self.partition(master_id) {
            return Ok(partition);
        }
        let mut map = self
            .partitions
            .write()
            .map_err(|_| DomainError::conflict("store lock poisoned"))?;
        Ok(map.entry(master_id.clone()).or_default().clone())
    }
}

impl<T> Default for InMemoryTenantStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TenantStore<T> for InMemoryTenantStore<T>
where
    T: Entity + Send + Sync + 'static,
{
    fn find(&self, master_id: &MasterId, id: &EntityId) -> Option<T> {
        let partition = self.partition(master_id)?;
        let inner = partition.read().ok()?;
        inner.records.get(id).cloned()
    }

    fn find_all(&self, master_id: &MasterId, page: Page) -> Vec<T> {
        let Some(partition) = self.partition(master_id) else {
            return Vec::new();
        };
        let inner = match partition.read() {
            Ok(inner) => inner,
            Err(_) => return Vec::new(),
        };

        let (offset, quantity) = page.window();
        inner
            .order
            .iter()
            .skip(offset)
            .take(quantity)
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    fn create(&self, master_id: &MasterId, entity: T) -> DomainResult<EntityId> {
        let partition = self.partition_or_create(master_id)?;
        let mut inner = partition
            .write()
            .map_err(|_| DomainError::conflict("store lock poisoned"))?;

        let id = entity.id().clone();
        if inner.records.contains_key(&id) {
            return Err(DomainError::duplicate(format!(
                "id {id} already exists in this partition"
            )));
        }

        inner.order.push(id.clone());
        inner.records.insert(id.clone(), entity);
        Ok(id)
    }

    fn update(&self, master_id: &MasterId, entity: T) -> DomainResult<T> {
        let partition = self.partition(master_id).ok_or(DomainError::NotFound)?;
        let mut inner = partition
            .write()
            .map_err(|_| DomainError::conflict("store lock poisoned"))?;

        let id = entity.id().clone();
        if !inner.records.contains_key(&id) {
            return Err(DomainError::NotFound);
        }

        inner.records.insert(id, entity.clone());
        Ok(entity)
    }

    fn delete(&self, master_id: &MasterId, id: &EntityId) -> DomainResult<()> {
        let partition = self.partition(master_id).ok_or(DomainError::NotFound)?;
        let mut inner = partition
            .write()
            .map_err(|_| DomainError::conflict("store lock poisoned"))?;

        if inner.records.remove(id).is_none() {
            return Err(DomainError::NotFound);
        }
        inner.order.retain(|existing| existing != id);
        Ok(())
    }

    fn mutate(
        &self,
        master_id: &MasterId,
        id: &EntityId,
        op: &mut dyn FnMut(&mut T) -> DomainResult<()>,
    ) -> DomainResult<T> {
        let partition = self.partition(master_id).ok_or(DomainError::NotFound)?;
        let mut inner = partition
            .write()
            .map_err(|_| DomainError::conflict("store lock poisoned"))?;

        let current = inner.records.get(id).ok_or(DomainError::NotFound)?;
        let mut working = current.clone();
        op(&mut working)?;

        // The id is the partition key; a mutation must not move the record.
        if working.id() != id {
            return Err(DomainError::conflict(
                "mutation must not change the entity id",
            ));
        }

        inner.records.insert(id.clone(), working.clone());
        Ok(working)
    }
}
