//! School-events domain module (calendar events: holidays, meetings, exams).
//!
//! This crate contains business rules for school events, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod event;

pub use event::SchoolEvent;
