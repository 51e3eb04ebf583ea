//! Address search entry points.
//!
//! # Responsibility
//! - Expose substring lookup over the `locations` table.
//! - Keep `LIKE` pattern building and escaping inside core.

pub mod address;
