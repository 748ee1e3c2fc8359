//! Attendance domain module.
//!
//! This crate contains business rules for attendance records, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod attendance;

pub use attendance::Attendance;
