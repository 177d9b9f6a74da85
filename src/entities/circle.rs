//! Circle entity

use super::EntityCommon;
use crate::types::Vector2;

/// A circle entity defined by center and radius
#[derive(Debug, Clone)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector2,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a new unit circle at the origin
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector2::ZERO,
            radius: 1.0,
        }
    }

    /// Create a circle from center and radius
    pub fn from_center_radius(center: Vector2, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }

    /// Get the diameter
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::from_center_radius(Vector2::new(5.0, 5.0), 2.0);
        assert_eq!(circle.center, Vector2::new(5.0, 5.0));
        assert_eq!(circle.diameter(), 4.0);
    }
}
