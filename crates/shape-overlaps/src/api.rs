//! Boundary-facing surface: one `generate` call and its serializable records.
//!
//! The records mirror the wire shape expected by callers (camelCase keys,
//! `type` tag, polygon-only fields omitted for circles). Transport concerns
//! (request parsing, status codes) stay with the caller.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::generator::{GenCfg, GenParams, Generation, GeneratorError, ShapeGenerator};
use crate::geom2::Point2;
use crate::group::OverlapGroup;
use crate::shapes::{Color, Shape, ShapeId, ShapeKind};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for PointRecord {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    pub id: ShapeId,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub center: PointRecord,
    pub radius: f64,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sides: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<PointRecord>>,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let (sides, rotation_angle) = match shape.kind() {
            ShapeKind::RegularPolygon(p) => (Some(p.sides()), Some(p.rotation())),
            _ => (None, None),
        };
        let vertices = match shape.kind() {
            ShapeKind::Circle(_) => None,
            kind => Some(kind.vertices().iter().copied().map(PointRecord::from).collect()),
        };
        Self {
            id: shape.id().clone(),
            kind: shape.type_name(),
            center: shape.center().into(),
            radius: shape.radius(),
            color: shape.color(),
            sides,
            rotation_angle,
            vertices,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub shape_ids: Vec<ShapeId>,
    pub color: Color,
    pub size: usize,
}

impl From<&OverlapGroup> for GroupRecord {
    fn from(g: &OverlapGroup) -> Self {
        Self {
            shape_ids: g.shape_ids.clone(),
            color: g.color,
            size: g.size(),
        }
    }
}

/// Result of one generation request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub shapes: Vec<ShapeRecord>,
    pub total_count: usize,
    /// Components with at least two members only.
    pub overlap_groups: Vec<GroupRecord>,
}

impl From<&Generation> for GenerationResult {
    fn from(g: &Generation) -> Self {
        let shapes: Vec<ShapeRecord> = g.population.iter().map(ShapeRecord::from).collect();
        Self {
            total_count: shapes.len(),
            shapes,
            overlap_groups: g.groups.iter().map(GroupRecord::from).collect(),
        }
    }
}

/// Generate with default configuration from a seeded `StdRng`.
pub fn generate(params: GenParams, seed: u64) -> Result<GenerationResult, GeneratorError> {
    generate_with_rng(params, GenCfg::default(), StdRng::seed_from_u64(seed))
}

/// Generate with explicit configuration and randomness source.
pub fn generate_with_rng<R: Rng>(
    params: GenParams,
    cfg: GenCfg,
    rng: R,
) -> Result<GenerationResult, GeneratorError> {
    let generation = ShapeGenerator::new(params, cfg, rng)?.run()?;
    Ok(GenerationResult::from(&generation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn params(how_many: i64) -> GenParams {
        GenParams {
            width: 1000,
            height: 800,
            radius_max: 80,
            how_many,
            max_edges: 7,
        }
    }

    #[test]
    fn records_follow_wire_layout() {
        let res = generate(params(60), 2024).unwrap();
        assert_eq!(res.total_count, 60);
        let json: Value = serde_json::to_value(&res).unwrap();
        for shape in json["shapes"].as_array().unwrap() {
            let ty = shape["type"].as_str().unwrap();
            assert!(shape["id"].as_str().unwrap().starts_with("shape_"));
            assert!(shape["center"]["x"].is_f64());
            let color = shape["color"].as_str().unwrap();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            match ty {
                "circle" => {
                    assert!(shape.get("vertices").is_none());
                    assert!(shape.get("sides").is_none());
                }
                "regularPolygon" => {
                    assert!(shape["sides"].as_u64().unwrap() >= 3);
                    assert!(shape["rotationAngle"].is_f64());
                    assert!(!shape["vertices"].as_array().unwrap().is_empty());
                }
                "irregularPolygon" => {
                    assert!(shape.get("sides").is_none());
                    assert!(shape["vertices"].as_array().unwrap().len() >= 3);
                }
                other => panic!("unexpected type {other}"),
            }
        }
        for group in json["overlapGroups"].as_array().unwrap() {
            let n = group["shapeIds"].as_array().unwrap().len();
            assert!(n >= 2);
            assert_eq!(group["size"].as_u64().unwrap() as usize, n);
        }
    }

    #[test]
    fn group_members_carry_group_color() {
        let res = generate(params(80), 7).unwrap();
        for g in &res.overlap_groups {
            for id in &g.shape_ids {
                let s = res.shapes.iter().find(|s| &s.id == id).unwrap();
                assert_eq!(s.color, g.color);
            }
        }
    }

    #[test]
    fn invalid_params_produce_no_result() {
        let err = generate(
            GenParams {
                max_edges: 2,
                ..params(10)
            },
            1,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
