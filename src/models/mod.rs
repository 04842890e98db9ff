//! Domain model types for geographic tours.
//!
//! Provides named points with longitude/latitude, the point set a search runs
//! over, and closed tours as permutations of that set.

mod point;
mod tour;

pub use point::{Point, PointSet};
pub use tour::Tour;
