use super::*;
use crate::geom2::Point2;
use crate::shapes::{Circle, IrregularPolygon, RegularPolygon, ShapeKind};
use nalgebra::vector;

fn circle(x: f64, y: f64, r: f64) -> ShapeKind {
    Circle::new(vector![x, y], r).unwrap().into()
}

fn poly(vs: &[(f64, f64)]) -> ShapeKind {
    let verts: Vec<Point2> = vs.iter().map(|&(x, y)| vector![x, y]).collect();
    IrregularPolygon::from_vertices(verts).unwrap().into()
}

fn square(x0: f64, y0: f64, side: f64) -> ShapeKind {
    poly(&[
        (x0, y0),
        (x0 + side, y0),
        (x0 + side, y0 + side),
        (x0, y0 + side),
    ])
}

fn both_ways(a: &ShapeKind, b: &ShapeKind) -> bool {
    let ab = overlaps(a, b);
    assert_eq!(ab, overlaps(b, a), "asymmetric result");
    ab
}

#[test]
fn circles_touching_is_overlap() {
    assert!(both_ways(&circle(0.0, 0.0, 5.0), &circle(10.0, 0.0, 5.0)));
    assert!(!both_ways(&circle(0.0, 0.0, 5.0), &circle(10.0001, 0.0, 5.0)));
}

#[test]
fn sat_known_squares() {
    let a = square(0.0, 0.0, 10.0);
    assert!(both_ways(&a, &square(5.0, 5.0, 10.0)));
    assert!(!both_ways(&a, &square(20.0, 20.0, 10.0)));
}

#[test]
fn sat_shared_edge_counts_as_overlap() {
    assert!(both_ways(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
    assert!(both_ways(&square(0.0, 0.0, 10.0), &square(10.0, 10.0, 10.0)));
}

#[test]
fn sat_diagonal_gap_found_on_triangle_normal() {
    // Bounding boxes intersect but the hypotenuse separates them.
    let tri = poly(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    let sq = square(6.0, 6.0, 3.0);
    assert!(!both_ways(&tri, &sq));
}

#[test]
fn circle_polygon_vertex_and_edge_cases() {
    let sq = square(0.0, 0.0, 10.0);
    // vertex inside circle
    assert!(both_ways(&circle(-3.0, -4.0, 5.0), &sq));
    // edge tangent, no vertex inside
    assert!(both_ways(&circle(5.0, -2.0, 2.0), &sq));
    // just out of reach of the edge
    assert!(!both_ways(&circle(5.0, -2.0, 1.999), &sq));
    // near a corner diagonally, beyond reach
    assert!(!both_ways(&circle(-3.0, -3.0, 4.0), &sq));
}

#[test]
fn regular_polygon_against_circle_and_irregular() {
    let hex: ShapeKind = RegularPolygon::new(vector![0.0, 0.0], 10.0, 6, 0.0).unwrap().into();
    // vertex (10, 0) touches the circle boundary
    assert!(both_ways(&hex, &circle(15.0, 0.0, 5.0)));
    assert!(!both_ways(&hex, &circle(16.0, 0.0, 5.0)));
    let tri = poly(&[(9.0, -1.0), (20.0, -1.0), (20.0, 1.0)]);
    assert!(both_ways(&hex, &tri));
}

#[test]
fn identical_copies_overlap() {
    let shapes = [
        circle(3.0, 4.0, 1.0),
        square(0.0, 0.0, 2.0),
        RegularPolygon::new(vector![1.0, 1.0], 3.0, 7, 0.4).unwrap().into(),
    ];
    for s in &shapes {
        assert!(overlaps(s, &s.clone()));
    }
}

#[test]
fn axes_skip_duplicates_and_zero_edges() {
    let sq: Vec<Point2> = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    let axes = separating_axes(&sq);
    // opposite edges share an axis; the zero-length edge yields none
    assert_eq!(axes.len(), 2);
    for a in &axes {
        assert!((a.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn projection_intervals_are_closed() {
    let a = Projection { min: 0.0, max: 1.0 };
    assert!(a.overlaps(&Projection { min: 1.0, max: 2.0 }));
    assert!(!a.overlaps(&Projection {
        min: 1.0 + 1e-12,
        max: 2.0
    }));
    assert!(Projection::of(&[], vector![1.0, 0.0]).is_none());
}

#[test]
fn empty_vertex_sets_never_overlap() {
    let c = Circle::new(vector![0.0, 0.0], 100.0).unwrap();
    assert!(!circle_polygon_overlap(&c, &[]));
    assert!(!polygons_overlap(&[], &[vector![0.0, 0.0]]));
}
