//! Editable Polygon
//!
//! An ordered, implicitly closed vertex loop. Only three edits exist:
//! append, move one vertex, remove one vertex.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors raised by polygon edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The vertex index does not exist.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {index} out of range for polygon of {len} vertices")
            }
        }
    }
}

impl std::error::Error for EditError {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex, returning its index.
    pub fn push(&mut self, vertex: Vec2) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn set(&mut self, index: usize, vertex: Vec2) -> Result<(), EditError> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })?;
        *slot = vertex;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Vec2, EditError> {
        if index >= self.vertices.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        Ok(self.vertices.remove(index))
    }

    /// First vertex within `radius` of `point`, if any.
    pub fn pick(&self, point: Vec2, radius: f32) -> Option<usize> {
        let radius_sq = radius * radius;
        self.vertices
            .iter()
            .position(|v| v.distance_squared(point) <= radius_sq)
    }
}
