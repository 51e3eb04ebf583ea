//! Domain model for points of interest.
//!
//! # Responsibility
//! - Define the `Location` record shared by store, search and map layers.
//! - Parse raw form input into records before they reach the store.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `LocationId`.
//! - Deletion is permanent; there is no tombstone state.

pub mod input;
pub mod location;
