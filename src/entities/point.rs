//! Point entity

use super::EntityCommon;
use crate::types::Vector2;

/// A point entity, drawn as a fixed-size marker
#[derive(Debug, Clone)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location in world coordinates
    pub location: Vector2,
}

impl Point {
    /// Create a new point at the origin
    pub fn new() -> Self {
        Point {
            common: EntityCommon::new(),
            location: Vector2::ZERO,
        }
    }

    /// Create a point at a location
    pub fn at(location: Vector2) -> Self {
        Point {
            location,
            ..Self::new()
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}
