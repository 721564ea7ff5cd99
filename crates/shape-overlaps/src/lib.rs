//! Random 2D shape populations and transitive overlap grouping.
//!
//! Layers, leaves first:
//! - `geom2`: point helpers and the monotone-chain convex hull.
//! - `shapes`: circle / regular polygon / irregular polygon records and the
//!   `Population` arena.
//! - `overlap`: closed-boundary pairwise predicates (SAT for polygons).
//! - `group`: union-find components over all overlapping pairs, palette colors.
//! - `generator`: seeded population synthesis and the per-run orchestration.
//! - `api`: the `generate` entry point and its serializable records.
//!
//! Every run owns its state; nothing is cached between calls.

pub mod api;
pub mod generator;
pub mod geom2;
pub mod group;
pub mod overlap;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{generate, generate_with_rng, GenerationResult, GroupRecord, ShapeRecord};
pub use generator::{GenCfg, GenParams, GeneratorError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{generate, generate_with_rng, GenerationResult, GroupRecord, ShapeRecord};
    pub use crate::generator::{GenCfg, GenParams, Generation, GeneratorError, ShapeGenerator};
    pub use crate::geom2::{convex_hull, Point2};
    pub use crate::group::{find_components, group_shapes, DisjointSets, OverlapGroup};
    pub use crate::overlap::overlaps;
    pub use crate::shapes::{
        Circle, Color, IrregularPolygon, Population, RegularPolygon, Shape, ShapeId, ShapeKind,
        DEFAULT_PALETTE,
    };
}
