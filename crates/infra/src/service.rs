//! Use-case orchestration template.
//!
//! Every school module follows the same pipeline: authorize via the policy
//! engine **first**, then act on the partition named by the caller's
//! `master_id`, then hand back a detached result. This module implements
//! that pipeline once, generically, instead of copy-pasting it per module —
//! the copy-pasted version is where "one module forgot the check" bugs and
//! check-after-load drift come from.

use std::marker::PhantomData;
use std::sync::Arc;

use thiserror::Error;

use classhub_auth::{AccessDeniedError, Action, Module, PolicyEngine, TokenData};
use classhub_core::{DomainError, DomainResult, Entity, EntityId};

use crate::store::{Page, TenantStore};

/// Use-case level error, surfaced to the (out-of-scope) controller layer.
///
/// Nothing here is retried anywhere in the core: every variant is either a
/// caller error or a policy decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    AccessDenied(#[from] AccessDeniedError),

    #[error("not found")]
    NotFound,

    #[error("duplicate entity: {0}")]
    Duplicate(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            DomainError::Conflict(msg) => ServiceError::Conflict(msg),
            DomainError::Duplicate(msg) => ServiceError::Duplicate(msg),
            DomainError::NotFound => ServiceError::NotFound,
            DomainError::InvalidId(msg) => ServiceError::InvalidId(msg),
        }
    }
}

/// Count summary returned by batch list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    count: usize,
    verb: &'static str,
}

impl BatchSummary {
    fn entered(count: usize) -> Self {
        Self {
            count,
            verb: "entered",
        }
    }

    fn removed(count: usize) -> Self {
        Self {
            count,
            verb: "removed",
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl core::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.count == 1 {
            write!(f, "1 value was {}", self.verb)
        } else {
            write!(f, "{} values were {}", self.count, self.verb)
        }
    }
}

/// Generic use case for one module's entity type.
///
/// Constructed with the module tag it answers for, a policy engine shared
/// across all modules, and a tenant-partitioned store. Domain crates stay
/// auth-agnostic; the tag lives here, at the orchestration boundary.
pub struct ModuleService<T, S> {
    module: Module,
    policies: Arc<PolicyEngine>,
    store: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S> ModuleService<T, S>
where
    T: Entity + Send + Sync + 'static,
    S: TenantStore<T>,
{
    pub fn new(module: Module, policies: Arc<PolicyEngine>, store: S) -> Self {
        Self {
            module,
            policies,
            store,
            _entity: PhantomData,
        }
    }

    pub fn module(&self) -> Module {
        self.module
    }

    /// Policy check, before anything touches the store.
    fn authorize<'t>(
        &self,
        action: Action,
        token: Option<&'t TokenData>,
    ) -> Result<&'t TokenData, ServiceError> {
        if let Err(denied) = self.policies.verify(self.module, action, token) {
            tracing::warn!(module = ?self.module, action = ?action, "request denied: {denied}");
            return Err(denied.into());
        }
        token.ok_or_else(|| AccessDeniedError::MissingToken.into())
    }

    pub fn create(&self, token: Option<&TokenData>, entity: T) -> Result<EntityId, ServiceError> {
        let token = self.authorize(Action::Create, token)?;
        let id = self.store.create(token.master_id(), entity)?;
        tracing::debug!(module = ?self.module, id = %id, "entity created");
        Ok(id)
    }

    pub fn find(&self, token: Option<&TokenData>, id: &EntityId) -> Result<T, ServiceError> {
        let token = self.authorize(Action::Find, token)?;
        self.store
            .find(token.master_id(), id)
            .ok_or(ServiceError::NotFound)
    }

    pub fn find_all(&self, token: Option<&TokenData>, page: Page) -> Result<Vec<T>, ServiceError> {
        let token = self.authorize(Action::FindAll, token)?;
        Ok(self.store.find_all(token.master_id(), page))
    }

    pub fn update(&self, token: Option<&TokenData>, entity: T) -> Result<T, ServiceError> {
        let token = self.authorize(Action::Update, token)?;
        let updated = self.store.update(token.master_id(), entity)?;
        tracing::debug!(module = ?self.module, id = %updated.id(), "entity updated");
        Ok(updated)
    }

    pub fn delete(&self, token: Option<&TokenData>, id: &EntityId) -> Result<(), ServiceError> {
        let token = self.authorize(Action::Delete, token)?;
        self.store.delete(token.master_id(), id)?;
        tracing::debug!(module = ?self.module, id = %id, "entity deleted");
        Ok(())
    }

    /// Load the parent entity under lock, run a domain mutation on a working
    /// copy, and persist it — all-or-nothing. Shared by `add_values` and
    /// `remove_values`, and usable directly for one-off mutations
    /// (lifecycle changes, renames).
    pub fn mutate(
        &self,
        token: Option<&TokenData>,
        action: Action,
        id: &EntityId,
        op: &mut dyn FnMut(&mut T) -> DomainResult<()>,
    ) -> Result<T, ServiceError> {
        let token = self.authorize(action, token)?;
        Ok(self.store.mutate(token.master_id(), id, op)?)
    }

    /// Batch-add values to one of the entity's list fields.
    ///
    /// Each raw value goes through `apply`, which parses/validates it and
    /// delegates to the entity's own mutator. Any failing element aborts the
    /// whole batch with the stored record untouched.
    pub fn add_values<V>(
        &self,
        token: Option<&TokenData>,
        id: &EntityId,
        values: &[V],
        mut apply: impl FnMut(&mut T, &V) -> DomainResult<()>,
    ) -> Result<BatchSummary, ServiceError> {
        self.mutate(token, Action::Add, id, &mut |entity| {
            for value in values {
                apply(entity, value)?;
            }
            Ok(())
        })?;

        let summary = BatchSummary::entered(values.len());
        tracing::debug!(module = ?self.module, id = %id, "{summary}");
        Ok(summary)
    }

    /// Batch-remove values from one of the entity's list fields; symmetric
    /// to [`ModuleService::add_values`].
    pub fn remove_values<V>(
        &self,
        token: Option<&TokenData>,
        id: &EntityId,
        values: &[V],
        mut apply: impl FnMut(&mut T, &V) -> DomainResult<()>,
    ) -> Result<BatchSummary, ServiceError> {
        self.mutate(token, Action::Remove, id, &mut |entity| {
            for value in values {
                apply(entity, value)?;
            }
            Ok(())
        })?;

        let summary = BatchSummary::removed(values.len());
        tracing::debug!(module = ?self.module, id = %id, "{summary}");
        Ok(summary)
    }
}
