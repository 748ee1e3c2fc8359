//! Infrastructure layer: tenant-partitioned storage + use-case orchestration.
//!
//! Every school module goes through the same two pieces here: a
//! [`store::TenantStore`] keeps each tenant's records in an isolated
//! partition, and a [`service::ModuleService`] wraps it with the
//! authorize → load → mutate → persist pipeline shared by all modules.

pub mod service;
pub mod store;


pub use service::{BatchSummary, ModuleService, ServiceError};
pub use store::{InMemoryTenantStore, Page, TenantStore};
