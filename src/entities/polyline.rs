//! Heavy (vertex-record) polyline entity

use super::EntityCommon;
use crate::types::Vector2;

/// A heavy polyline: the legacy vertex-record form of [`LwPolyline`]
///
/// The viewer treats both polyline forms identically for bounds, hit
/// testing and rendering; they stay separate kinds because documents
/// distinguish them and the summary counts them apart.
///
/// [`LwPolyline`]: super::LwPolyline
#[derive(Debug, Clone)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertex locations in order
    pub vertices: Vec<Vector2>,
    /// Whether the last vertex connects back to the first
    pub closed: bool,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            closed: false,
        }
    }

    /// Create an open polyline from a vertex list
    pub fn from_vertices(vertices: Vec<Vector2>) -> Self {
        Polyline {
            vertices,
            ..Self::new()
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_creation() {
        let poly = Polyline::from_vertices(vec![Vector2::ZERO, Vector2::new(2.0, 2.0)]);
        assert_eq!(poly.vertex_count(), 2);
        assert!(!poly.closed);
    }
}
