//! Concrete shape variants and their constructors.
//!
//! - `Circle`: center and radius are authoritative; no vertices.
//! - `RegularPolygon`: vertices derived from (center, circumradius, sides, rotation).
//! - `IrregularPolygon`: convex hull of a sampled point cloud; center is the vertex
//!   mean and radius the farthest vertex from it.

use rand::Rng;
use std::f64::consts::TAU;

use crate::generator::GeneratorError;
use crate::geom2::{centroid, convex_polygon, distance, Point2};

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Result<Self, GeneratorError> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeneratorError::invalid("circle center must be finite"));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeneratorError::invalid(
                "circle radius must be finite and non-negative",
            ));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygon {
    center: Point2,
    radius: f64,
    sides: usize,
    rotation: f64,
    vertices: Vec<Point2>,
}

impl RegularPolygon {
    /// Vertex `k` sits at angle `2πk/sides + rotation`, at `radius` from `center`.
    pub fn new(
        center: Point2,
        radius: f64,
        sides: usize,
        rotation: f64,
    ) -> Result<Self, GeneratorError> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeneratorError::invalid("polygon center must be finite"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeneratorError::invalid("polygon radius must be positive"));
        }
        if sides < 3 {
            return Err(GeneratorError::invalid(format!(
                "polygon needs at least 3 sides, got {sides}"
            )));
        }
        if !rotation.is_finite() {
            return Err(GeneratorError::invalid("rotation angle must be finite"));
        }
        let step = TAU / sides as f64;
        let vertices = (0..sides)
            .map(|k| {
                let angle = step * k as f64 + rotation;
                center + Point2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Ok(Self {
            center,
            radius,
            sides,
            rotation,
            vertices,
        })
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Rotation in radians.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IrregularPolygon {
    vertices: Vec<Point2>,
    center: Point2,
    radius: f64,
}

impl IrregularPolygon {
    /// Sample `count` points at sorted random angles and radii in
    /// `band.0..band.1` times `radius` around `center`, then keep their hull.
    ///
    /// The hull may have fewer than `count` vertices. A hull below 3 vertices is
    /// reported as `DegenerateGeometry`.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2,
        radius: f64,
        count: usize,
        band: (f64, f64),
    ) -> Result<Self, GeneratorError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeneratorError::invalid("generation radius must be positive"));
        }
        if count < 3 {
            return Err(GeneratorError::invalid(format!(
                "irregular polygon needs at least 3 vertices, got {count}"
            )));
        }
        let (lo, hi) = band;
        let mut angles: Vec<f64> = (0..count).map(|_| rng.gen::<f64>() * TAU).collect();
        angles.sort_by(|a, b| a.total_cmp(b));
        let points: Vec<Point2> = angles
            .into_iter()
            .map(|th| {
                let r = radius * (lo + rng.gen::<f64>() * (hi - lo));
                center + Point2::new(th.cos(), th.sin()) * r
            })
            .collect();
        Self::from_points(&points)
    }

    /// Convex hull of `points` as a polygon.
    pub fn from_points(points: &[Point2]) -> Result<Self, GeneratorError> {
        let hull = convex_polygon(points)?;
        Self::from_vertices(hull)
    }

    /// Wrap an already convex, counterclockwise vertex sequence.
    pub fn from_vertices(vertices: Vec<Point2>) -> Result<Self, GeneratorError> {
        let center = centroid(&vertices).ok_or_else(|| {
            GeneratorError::degenerate("cannot compute center of a polygon with no vertices")
        })?;
        if vertices.len() < 3 {
            return Err(GeneratorError::degenerate(format!(
                "polygon has only {} vertices",
                vertices.len()
            )));
        }
        let radius = vertices
            .iter()
            .map(|v| distance(center, *v))
            .fold(0.0, f64::max);
        Ok(Self {
            vertices,
            center,
            radius,
        })
    }

    /// Vertex mean.
    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Largest center-to-vertex distance.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
}
