//! Domain model types for depot tours.
//!
//! Provides named points with coordinates and the registry a selection is
//! drawn from.

mod point;
mod registry;

pub use point::{Coordinates, Point};
pub use registry::LocationRegistry;
