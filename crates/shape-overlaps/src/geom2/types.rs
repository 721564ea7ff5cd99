//! Point type and the handful of vector helpers the overlap predicates need.
//!
//! - `Point2`: plain `nalgebra::Vector2<f64>`; positions and directions share it.
//! - `AXIS_EPS`: absolute tolerance for axis length and near-duplicate checks.
//!
//! Code cross-refs: `hull::convex_hull`, `overlap::{circle, sat}`

use nalgebra::Vector2;

/// 2D point (or direction) in canvas coordinates.
pub type Point2 = Vector2<f64>;

/// Absolute tolerance for separating-axis length and duplicate-axis detection.
///
/// All other comparisons in the overlap predicates are exact.
pub const AXIS_EPS: f64 = 1e-9;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (a - b).norm()
}

/// Dot product of two vectors.
#[inline]
pub fn dot(a: Point2, b: Point2) -> f64 {
    a.dot(&b)
}

/// Z-component of `(b - a) × (c - a)`.
/// Positive for a counterclockwise turn a→b→c, zero when collinear.
#[inline]
pub fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Mean of the given points. `None` on an empty slice.
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Closest point to `p` on the segment `a`–`b`.
///
/// Projects onto the supporting line and clamps the parameter to [0, 1].
/// A zero-length segment collapses to `a`.
pub fn closest_point_on_segment(p: Point2, a: Point2, b: Point2) -> Point2 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = (dot(p - a, ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}
