//! Map view support that does not depend on any map widget.
//!
//! # Responsibility
//! - Compute camera targets and marker text from stored locations.
//! - Build navigation hand-off links for an external maps application.

pub mod camera;
pub mod navigation;
