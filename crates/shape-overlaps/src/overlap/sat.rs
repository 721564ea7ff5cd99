//! Separating Axis Theorem for convex polygons.
//!
//! Candidate axes are unit edge normals. Near-zero edges and axes that repeat
//! an earlier one (same or opposite direction within `AXIS_EPS`) are dropped.
//! Projection intervals are closed, so touching polygons overlap.

use crate::geom2::{dot, Point2, AXIS_EPS};

/// Closed interval of a vertex set projected on an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Project `vertices` onto `axis`. `None` for an empty vertex set.
    pub fn of(vertices: &[Point2], axis: Point2) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        let p0 = dot(*first, axis);
        Some(rest.iter().fold(Self { min: p0, max: p0 }, |acc, v| {
            let p = dot(*v, axis);
            Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            }
        }))
    }

    #[inline]
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(other.max < self.min || self.max < other.min)
    }
}

#[inline]
fn same_axis(a: Point2, b: Point2) -> bool {
    let same = (a.x - b.x).abs() < AXIS_EPS && (a.y - b.y).abs() < AXIS_EPS;
    let opposite = (a.x + b.x).abs() < AXIS_EPS && (a.y + b.y).abs() < AXIS_EPS;
    same || opposite
}

/// Unit edge normals of the closed polygon `vertices`, deduplicated.
pub fn separating_axes(vertices: &[Point2]) -> Vec<Point2> {
    let n = vertices.len();
    let mut axes: Vec<Point2> = Vec::with_capacity(n);
    for k in 0..n {
        let edge = vertices[(k + 1) % n] - vertices[k];
        let normal = Point2::new(-edge.y, edge.x);
        let len = normal.norm();
        if len <= AXIS_EPS {
            continue;
        }
        let axis = normal / len;
        if !axes.iter().any(|a| same_axis(*a, axis)) {
            axes.push(axis);
        }
    }
    axes
}

/// True if the projections of `a` and `b` on `axis` are disjoint.
#[inline]
pub fn separated_on(a: &[Point2], b: &[Point2], axis: Point2) -> bool {
    match (Projection::of(a, axis), Projection::of(b, axis)) {
        (Some(pa), Some(pb)) => !pa.overlaps(&pb),
        _ => true,
    }
}

/// Convex polygon overlap: no axis from either polygon separates them.
pub fn polygons_overlap(a: &[Point2], b: &[Point2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let axes_a = separating_axes(a);
    let axes_b = separating_axes(b);
    !axes_a
        .iter()
        .chain(axes_b.iter())
        .any(|axis| separated_on(a, b, *axis))
}
