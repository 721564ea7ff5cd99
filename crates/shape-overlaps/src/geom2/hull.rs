use super::types::{cross, Point2};
use crate::generator::GeneratorError;
use std::cmp::Ordering;

/// Andrew's monotone chain convex hull (returns hull in CCW order).
///
/// Points are sorted by x, ties by y. Collinear and clockwise turns (cross <= 0)
/// are popped, so no three consecutive hull vertices are collinear. With fewer
/// than 3 input points the input is returned unchanged; callers that need a
/// polygon go through [`convex_polygon`].
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    // each chain ends where the other starts
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Convex hull that must be a proper polygon (at least 3 vertices).
pub fn convex_polygon(points: &[Point2]) -> Result<Vec<Point2>, GeneratorError> {
    if points.len() < 3 {
        return Err(GeneratorError::degenerate(format!(
            "convex hull needs at least 3 points, got {}",
            points.len()
        )));
    }
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return Err(GeneratorError::degenerate(format!(
            "convex hull collapsed to {} vertices (collinear input)",
            hull.len()
        )));
    }
    Ok(hull)
}

/// True if `p` lies inside or on the boundary of the CCW convex polygon `hull`.
pub fn contains_point(hull: &[Point2], p: Point2, eps: f64) -> bool {
    if hull.len() < 3 {
        return false;
    }
    (0..hull.len()).all(|k| {
        let a = hull[k];
        let b = hull[(k + 1) % hull.len()];
        cross(a, b, p) >= -eps * (b - a).norm().max(1.0)
    })
}

/// True if every consecutive vertex triple turns strictly counterclockwise.
pub fn is_strictly_ccw(hull: &[Point2]) -> bool {
    let n = hull.len();
    n >= 3 && (0..n).all(|k| cross(hull[k], hull[(k + 1) % n], hull[(k + 2) % n]) > 0.0)
}
