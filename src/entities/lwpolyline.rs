//! Lightweight polyline entity

use super::EntityCommon;
use crate::types::Vector2;

/// A lightweight polyline: an ordered run of 2D vertices, optionally closed
#[derive(Debug, Clone)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices in order
    pub points: Vec<Vector2>,
    /// Whether the last vertex connects back to the first
    pub closed: bool,
}

impl LwPolyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            points: Vec::new(),
            closed: false,
        }
    }

    /// Create an open polyline from a vertex list
    pub fn from_points(points: Vec<Vector2>) -> Self {
        LwPolyline {
            points,
            ..Self::new()
        }
    }

    /// Create a closed polyline from a vertex list
    pub fn closed_from_points(points: Vec<Vector2>) -> Self {
        LwPolyline {
            points,
            closed: true,
            ..Self::new()
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lwpolyline_creation() {
        let poly = LwPolyline::closed_from_points(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
        ]);
        assert_eq!(poly.vertex_count(), 3);
        assert!(poly.closed);
    }
}
