//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the location data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes persist exactly what the caller passed.
//! - Not-found is a value (`None`, `0` rows), not an error.

pub mod location_repo;
