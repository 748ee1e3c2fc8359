//! `classhub-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it decides
//! whether a role may perform an action on a module, nothing else. Tenant
//! scoping is the store's concern, token issuance/verification the
//! transport layer's.

pub mod engine;
pub mod policy;
pub mod roles;
pub mod token;

pub use engine::{AccessDeniedError, PolicyEngine};
pub use policy::{Action, Module, PolicyMatrix};
pub use roles::Role;
pub use token::TokenData;
