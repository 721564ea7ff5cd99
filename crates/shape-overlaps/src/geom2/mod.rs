//! 2D geometry primitives (points, hull).
//!
//! Purpose
//! - Provide the point type shared by every shape plus the convex hull builder
//!   used to turn a sampled point cloud into a convex polygon.
//! - Keep predicates numerically explicit: exact comparisons everywhere except
//!   axis filtering, which uses `AXIS_EPS`.
//!
//! Code cross-refs: `shapes::Shape`, `overlap::overlaps`

mod hull;
mod types;

pub use hull::{contains_point, convex_hull, convex_polygon, is_strictly_ccw};
pub use types::{centroid, closest_point_on_segment, cross, distance, dot, Point2, AXIS_EPS};

#[cfg(test)]
mod tests;
