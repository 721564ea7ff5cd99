//! Pairwise overlap predicates.
//!
//! Dispatch is on the pair of variants:
//! - circle / circle: center distance against the radius sum;
//! - circle / polygon: vertex-in-circle, then closest point on each edge;
//! - polygon / polygon: Separating Axis Theorem over both edge-normal sets.
//!
//! Boundaries are closed everywhere (touching counts as overlapping). The
//! predicate is symmetric and free of side effects.

mod circle;
mod sat;

pub use circle::{circle_polygon_overlap, circles_overlap};
pub use sat::{polygons_overlap, separated_on, separating_axes, Projection};

use crate::shapes::ShapeKind;

/// Closed-boundary overlap test between two shapes.
pub fn overlaps(a: &ShapeKind, b: &ShapeKind) -> bool {
    match (a, b) {
        (ShapeKind::Circle(ca), ShapeKind::Circle(cb)) => circles_overlap(ca, cb),
        (ShapeKind::Circle(c), poly) | (poly, ShapeKind::Circle(c)) => {
            circle_polygon_overlap(c, poly.vertices())
        }
        (pa, pb) => polygons_overlap(pa.vertices(), pb.vertices()),
    }
}

#[cfg(test)]
mod tests;
