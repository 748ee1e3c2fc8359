//! Schedules domain module.
//!
//! This crate contains business rules for schedules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod schedule;

pub use schedule::Schedule;
