use crate::geom2::{closest_point_on_segment, distance, Point2};
use crate::shapes::Circle;

/// Center distance <= sum of radii (touching counts).
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    distance(a.center(), b.center()) <= a.radius() + b.radius()
}

/// A vertex inside the circle, or an edge whose closest point to the center is.
///
/// Only the boundary is tested: a circle lying strictly inside the polygon,
/// away from every edge, is not reported. An empty vertex list never overlaps.
pub fn circle_polygon_overlap(circle: &Circle, vertices: &[Point2]) -> bool {
    if vertices.is_empty() {
        return false;
    }
    let c = circle.center();
    let r = circle.radius();
    if vertices.iter().any(|v| distance(c, *v) <= r) {
        return true;
    }
    let n = vertices.len();
    (0..n).any(|k| {
        let closest = closest_point_on_segment(c, vertices[k], vertices[(k + 1) % n]);
        distance(c, closest) <= r
    })
}
