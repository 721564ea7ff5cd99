//! Shape model: identified, colored records over three geometric variants.
//!
//! Purpose
//! - `ShapeKind` is a tagged union (circle, regular polygon, irregular polygon)
//!   exposing a representative center, a representative radius, and a vertex
//!   sequence (empty for circles).
//! - `Shape` adds a stable id and a mutable display color.
//! - `Population` owns all shapes of one run and resolves ids to records, so
//!   grouping can recolor shapes without holding references into construction.
//!
//! Code cross-refs: `overlap::overlaps`, `group::assign_group_colors`

mod color;
mod kinds;
mod population;

pub use color::{Color, DEFAULT_PALETTE};
pub use kinds::{Circle, IrregularPolygon, RegularPolygon};
pub use population::Population;

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::geom2::Point2;

/// Stable shape identifier (`shape_<uuid>`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random v4-formatted UUID drawn from `rng`, prefixed with `shape_`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bits: u128 = rng.gen();
        // version 4, RFC 4122 variant
        bits = (bits & !(0xFu128 << 76)) | (0x4u128 << 76);
        bits = (bits & !(0x3u128 << 62)) | (0x2u128 << 62);
        Self(format!(
            "shape_{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (bits >> 96) as u32,
            ((bits >> 80) & 0xFFFF) as u16,
            ((bits >> 64) & 0xFFFF) as u16,
            ((bits >> 48) & 0xFFFF) as u16,
            (bits & 0xFFFF_FFFF_FFFF) as u64,
        ))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geometry of a shape, dispatched explicitly by the overlap predicates.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    RegularPolygon(RegularPolygon),
    IrregularPolygon(IrregularPolygon),
}

impl ShapeKind {
    pub fn center(&self) -> Point2 {
        match self {
            Self::Circle(c) => c.center(),
            Self::RegularPolygon(p) => p.center(),
            Self::IrregularPolygon(p) => p.center(),
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Self::Circle(c) => c.radius(),
            Self::RegularPolygon(p) => p.radius(),
            Self::IrregularPolygon(p) => p.radius(),
        }
    }

    /// Ordered vertices; empty for circles.
    pub fn vertices(&self) -> &[Point2] {
        match self {
            Self::Circle(_) => &[],
            Self::RegularPolygon(p) => p.vertices(),
            Self::IrregularPolygon(p) => p.vertices(),
        }
    }

    /// Wire name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::RegularPolygon(_) => "regularPolygon",
            Self::IrregularPolygon(_) => "irregularPolygon",
        }
    }
}

impl From<Circle> for ShapeKind {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<RegularPolygon> for ShapeKind {
    fn from(p: RegularPolygon) -> Self {
        Self::RegularPolygon(p)
    }
}

impl From<IrregularPolygon> for ShapeKind {
    fn from(p: IrregularPolygon) -> Self {
        Self::IrregularPolygon(p)
    }
}

/// A shape record: id, display color, geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    id: ShapeId,
    color: Color,
    kind: ShapeKind,
}

impl Shape {
    pub fn new(id: ShapeId, color: Color, kind: impl Into<ShapeKind>) -> Self {
        Self {
            id,
            color,
            kind: kind.into(),
        }
    }

    /// Fresh shape with a random id and random color from `rng`.
    pub fn random_identity<R: Rng + ?Sized>(rng: &mut R, kind: impl Into<ShapeKind>) -> Self {
        let id = ShapeId::random(rng);
        let color = Color::random(rng);
        Self::new(id, color, kind)
    }

    #[inline]
    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.kind.center()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.kind.radius()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        self.kind.vertices()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Closed-boundary overlap test; see [`crate::overlap::overlaps`].
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        crate::overlap::overlaps(&self.kind, &other.kind)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(ID: {}, Color: {})",
            self.type_name(),
            self.id,
            self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_ids_are_seeded_and_uuid_shaped() {
        let a = ShapeId::random(&mut StdRng::seed_from_u64(5));
        let b = ShapeId::random(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        let s = a.as_str().strip_prefix("shape_").unwrap();
        let parts: Vec<_> = s.split('-').map(str::len).collect();
        assert_eq!(parts, vec![8, 4, 4, 4, 12]);
        assert_eq!(&s[14..15], "4");
    }

    #[test]
    fn circle_has_no_vertices() {
        let c = Circle::new(vector![1.0, 2.0], 3.0).unwrap();
        let s = Shape::new(ShapeId::new("c"), Color::rgb(1, 2, 3), c);
        assert!(s.vertices().is_empty());
        assert_eq!(s.type_name(), "circle");
        assert_eq!(s.to_string(), "circle(ID: c, Color: #010203)");
    }

    #[test]
    fn population_rejects_duplicate_ids_and_recolors() {
        let c = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
        let s = Shape::new(ShapeId::new("a"), Color::rgb(0, 0, 0), c);
        let mut pop = Population::new();
        pop.push(s.clone()).unwrap();
        assert!(pop.push(s).is_err());
        assert!(pop.set_color(&ShapeId::new("a"), DEFAULT_PALETTE[2]));
        assert!(!pop.set_color(&ShapeId::new("zz"), DEFAULT_PALETTE[2]));
        assert_eq!(
            pop.get(&ShapeId::new("a")).unwrap().color(),
            DEFAULT_PALETTE[2]
        );
    }
}
