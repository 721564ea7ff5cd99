use super::union_find::DisjointSets;
use crate::generator::GeneratorError;
use crate::shapes::{Color, Population, Shape, ShapeId};

/// A connected overlap component with at least two members and its color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlapGroup {
    pub shape_ids: Vec<ShapeId>,
    pub color: Color,
}

impl OverlapGroup {
    #[inline]
    pub fn size(&self) -> usize {
        self.shape_ids.len()
    }
}

/// Connected components of the overlap graph, as index sets into `shapes`.
///
/// Every unordered pair is tested exactly once (O(n²) predicate calls).
/// Components come in order of their first member; members are ascending.
/// Singletons are included.
pub fn find_components(shapes: &[Shape]) -> Vec<Vec<usize>> {
    let n = shapes.len();
    let mut sets = DisjointSets::new(n);
    let mut edges = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            if shapes[i].overlaps(&shapes[j]) {
                sets.union(i, j);
                edges += 1;
            }
        }
    }
    let groups = sets.groups();
    tracing::debug!(
        shapes = n,
        overlap_pairs = edges,
        components = groups.len(),
        "overlap components"
    );
    groups
}

/// Recolor every component of size >= 2 and return those components.
///
/// Component `k` (counted over all components, singletons included, in the
/// order given) gets `palette[k % palette.len()]` when it has two or more
/// members. Singletons keep their color.
pub fn assign_group_colors(
    population: &mut Population,
    components: &[Vec<usize>],
    palette: &[Color],
) -> Result<Vec<OverlapGroup>, GeneratorError> {
    if palette.is_empty() {
        return Err(GeneratorError::invalid("group palette must not be empty"));
    }
    let mut groups = Vec::new();
    for (k, members) in components.iter().enumerate() {
        if members.len() < 2 {
            continue;
        }
        let color = palette[k % palette.len()];
        let mut shape_ids = Vec::with_capacity(members.len());
        for &i in members {
            let id = population
                .shapes()
                .get(i)
                .map(|s| s.id().clone())
                .ok_or_else(|| {
                    GeneratorError::invalid(format!("component index {i} out of range"))
                })?;
            population.set_color(&id, color);
            shape_ids.push(id);
        }
        groups.push(OverlapGroup { shape_ids, color });
    }
    Ok(groups)
}

/// Components plus recoloring in one call; returns only multi-member groups.
pub fn group_shapes(
    population: &mut Population,
    palette: &[Color],
) -> Result<Vec<OverlapGroup>, GeneratorError> {
    let components = find_components(population.shapes());
    assign_group_colors(population, &components, palette)
}
