use std::collections::HashMap;

use super::{Color, Shape, ShapeId};
use crate::generator::GeneratorError;

/// Arena of uniquely identified shapes for a single generation run.
///
/// Shapes keep their insertion order; lookups by id go through an index map.
#[derive(Clone, Debug, Default)]
pub struct Population {
    shapes: Vec<Shape>,
    index: HashMap<ShapeId, usize>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of shapes; fails on a repeated id.
    pub fn from_shapes(shapes: Vec<Shape>) -> Result<Self, GeneratorError> {
        let mut pop = Self::with_capacity(shapes.len());
        for shape in shapes {
            pop.push(shape)?;
        }
        Ok(pop)
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
        }
    }

    /// Append a shape; its id must not already be present.
    pub fn push(&mut self, shape: Shape) -> Result<usize, GeneratorError> {
        if self.index.contains_key(shape.id()) {
            return Err(GeneratorError::invalid(format!(
                "duplicate shape id {}",
                shape.id()
            )));
        }
        let pos = self.shapes.len();
        self.index.insert(shape.id().clone(), pos);
        self.shapes.push(shape);
        Ok(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.index.get(id).map(|&i| &self.shapes[i])
    }

    /// Overwrite a shape's color. Returns false for unknown ids.
    pub fn set_color(&mut self, id: &ShapeId, color: Color) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.shapes[i].set_color(color);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
