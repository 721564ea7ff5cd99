use super::*;
use crate::generator::GeneratorError;
use nalgebra::vector;

#[test]
fn hull_of_square_with_interior_point() {
    let points = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.5, 0.5],
        vector![0.0, 1.0],
    ];
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 4);
    assert!(is_strictly_ccw(&hull));
    // lowest-leftmost point first
    assert_eq!(hull[0], vector![0.0, 0.0]);
    assert_eq!(hull[1], vector![1.0, 0.0]);
    for p in &points {
        assert!(contains_point(&hull, *p, 1e-12));
    }
}

#[test]
fn hull_drops_collinear_edge_points() {
    let points = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 2.0],
    ];
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 3);
    assert!(!hull.contains(&vector![1.0, 0.0]));
}

#[test]
fn hull_of_two_points_is_returned_unchanged() {
    let points = vec![vector![3.0, 1.0], vector![0.0, 0.0]];
    assert_eq!(convex_hull(&points), points);
    assert!(matches!(
        convex_polygon(&points),
        Err(GeneratorError::DegenerateGeometry { .. })
    ));
}

#[test]
fn collinear_cloud_collapses_to_segment() {
    let points: Vec<_> = (0..6).map(|k| vector![k as f64, 2.0 * k as f64]).collect();
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 2);
    assert!(matches!(
        convex_polygon(&points),
        Err(GeneratorError::DegenerateGeometry { .. })
    ));
}

#[test]
fn closest_point_clamps_to_segment_ends() {
    let a = vector![0.0, 0.0];
    let b = vector![10.0, 0.0];
    assert_eq!(closest_point_on_segment(vector![5.0, 3.0], a, b), vector![5.0, 0.0]);
    assert_eq!(closest_point_on_segment(vector![-4.0, 1.0], a, b), a);
    assert_eq!(closest_point_on_segment(vector![12.0, -1.0], a, b), b);
    // zero-length segment
    assert_eq!(closest_point_on_segment(vector![1.0, 1.0], a, a), a);
}

#[test]
fn centroid_is_vertex_mean() {
    let pts = [vector![0.0, 0.0], vector![4.0, 0.0], vector![4.0, 2.0], vector![0.0, 2.0]];
    let c = centroid(&pts).unwrap();
    assert!((c - vector![2.0, 1.0]).norm() < 1e-12);
    assert!(centroid(&[]).is_none());
    assert!((distance(vector![0.0, 0.0], vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    assert_eq!(dot(vector![1.0, 2.0], vector![3.0, -1.0]), 1.0);
}
