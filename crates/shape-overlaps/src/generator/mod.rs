//! Random shape populations and their overlap grouping.
//!
//! Purpose
//! - Draw a population of circles, regular polygons, and irregular (hull)
//!   polygons inside a `width × height` canvas, then group and recolor it.
//! - All randomness comes from the RNG handed in, so a seeded `StdRng`
//!   reproduces ids, colors, and geometry exactly.
//!
//! Model
//! - Per shape: kind selector, generation radius in `[min_radius, radius_max]`,
//!   center keeping the generation circle inside the canvas, then the kind's
//!   own draws (side count and rotation, or vertex count and samples), then a
//!   random id and color.
//! - A degenerate irregular hull is redrawn up to `max_attempts` times; after
//!   that the whole run fails with `DegenerateGeometry`.
//!
//! Code cross-refs: `shapes::{Circle, RegularPolygon, IrregularPolygon}`,
//! `group::group_shapes`, `api::generate`

mod cfg;
mod error;
mod params;

pub use cfg::GenCfg;
pub use error::GeneratorError;
pub use params::GenParams;

use rand::Rng;
use std::f64::consts::TAU;

use crate::geom2::Point2;
use crate::group::{group_shapes, OverlapGroup};
use crate::shapes::{Circle, IrregularPolygon, Population, RegularPolygon, Shape, ShapeKind};

/// Outcome of one run: the recolored population and its multi-member groups.
#[derive(Clone, Debug)]
pub struct Generation {
    pub population: Population,
    pub groups: Vec<OverlapGroup>,
}

/// Shape source for one request. Owns its RNG; holds no state across runs.
pub struct ShapeGenerator<R: Rng> {
    params: GenParams,
    cfg: GenCfg,
    rng: R,
}

impl<R: Rng> ShapeGenerator<R> {
    /// Validate `params` and `cfg` before any draw happens.
    pub fn new(params: GenParams, cfg: GenCfg, rng: R) -> Result<Self, GeneratorError> {
        params.validate()?;
        cfg.validate()?;
        Ok(Self { params, cfg, rng })
    }

    /// Draw the next shape.
    pub fn next_shape(&mut self) -> Result<Shape, GeneratorError> {
        let selector: f64 = self.rng.gen();
        let radius = self.draw_radius();
        let center = Point2::new(
            draw_axis_center(&mut self.rng, radius, self.params.width as f64),
            draw_axis_center(&mut self.rng, radius, self.params.height as f64),
        );
        let kind: ShapeKind = if selector < self.cfg.circle_below {
            Circle::new(center, radius)?.into()
        } else if selector < self.cfg.regular_below {
            let sides = self.draw_vertex_count();
            let rotation = self.rng.gen::<f64>() * TAU;
            RegularPolygon::new(center, radius, sides, rotation)?.into()
        } else {
            let count = self.draw_vertex_count();
            self.draw_irregular(center, radius, count)?.into()
        };
        Ok(Shape::random_identity(&mut self.rng, kind))
    }

    /// Draw `how_many` shapes into a fresh population.
    pub fn populate(&mut self) -> Result<Population, GeneratorError> {
        let n = self.params.how_many as usize;
        let mut population = Population::new();
        for _ in 0..n {
            let shape = self.next_shape()?;
            population.push(shape)?;
        }
        Ok(population)
    }

    /// Populate, group by overlap, and recolor the groups.
    pub fn run(&mut self) -> Result<Generation, GeneratorError> {
        let mut population = self.populate()?;
        let groups = group_shapes(&mut population, &self.cfg.palette)?;
        let (mut circles, mut regular, mut irregular) = (0usize, 0usize, 0usize);
        for shape in &population {
            match shape.kind() {
                ShapeKind::Circle(_) => circles += 1,
                ShapeKind::RegularPolygon(_) => regular += 1,
                ShapeKind::IrregularPolygon(_) => irregular += 1,
            }
        }
        tracing::debug!(
            width = self.params.width,
            height = self.params.height,
            total = population.len(),
            circles,
            regular,
            irregular,
            groups = groups.len(),
            "generated population"
        );
        Ok(Generation { population, groups })
    }

    fn draw_radius(&mut self) -> f64 {
        let hi = self.params.radius_max as f64;
        let lo = self.cfg.min_radius.min(hi);
        lo + self.rng.gen::<f64>() * (hi - lo)
    }

    fn draw_vertex_count(&mut self) -> usize {
        let max = self.params.max_edges as usize;
        self.rng.gen_range(3..=max)
    }

    fn draw_irregular(
        &mut self,
        center: Point2,
        radius: f64,
        count: usize,
    ) -> Result<IrregularPolygon, GeneratorError> {
        for attempt in 0..self.cfg.max_attempts {
            match IrregularPolygon::generate(
                &mut self.rng,
                center,
                radius,
                count,
                self.cfg.radial_band,
            ) {
                Ok(poly) => return Ok(poly),
                Err(GeneratorError::DegenerateGeometry { reason }) => {
                    tracing::debug!(attempt, %reason, "redrawing degenerate irregular polygon");
                    continue;
                }
                Err(err) => return Err(err),
            }
        }
        Err(GeneratorError::degenerate(format!(
            "irregular polygon stayed degenerate after {} attempts",
            self.cfg.max_attempts
        )))
    }
}

/// Uniform in `[r, extent - r]`; the midpoint if the extent is narrower than `2r`.
fn draw_axis_center<R: Rng + ?Sized>(rng: &mut R, r: f64, extent: f64) -> f64 {
    let span = extent - 2.0 * r;
    if span <= 0.0 {
        return extent / 2.0;
    }
    r + rng.gen::<f64>() * span
}
