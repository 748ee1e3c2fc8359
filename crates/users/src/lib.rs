//! Users domain module (master, administrator, teacher, student, worker accounts).
//!
//! This crate contains business rules for user accounts, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage, no
//! authentication — tokens are issued elsewhere).

pub mod user;

pub use user::{Email, User, UserKind};
