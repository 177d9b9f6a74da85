//! Ellipse entity

use super::EntityCommon;
use crate::types::Vector2;

/// An ellipse entity defined by center, major axis vector, and axis ratio
#[derive(Debug, Clone)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector2,
    /// Major axis endpoint relative to the center
    pub major_axis: Vector2,
    /// Ratio of minor to major axis (0 < ratio <= 1)
    pub ratio: f64,
}

impl Ellipse {
    /// Create a new unit-circle-shaped ellipse at the origin
    pub fn new() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector2::ZERO,
            major_axis: Vector2::new(1.0, 0.0),
            ratio: 1.0,
        }
    }

    /// Create an ellipse from center, major axis vector, and ratio
    pub fn from_center_axis_ratio(center: Vector2, major_axis: Vector2, ratio: f64) -> Self {
        Ellipse {
            center,
            major_axis,
            ratio,
            ..Self::new()
        }
    }

    /// Length of the semi-major axis
    pub fn major_radius(&self) -> f64 {
        self.major_axis.length()
    }

    /// Length of the semi-minor axis
    pub fn minor_radius(&self) -> f64 {
        self.major_radius() * self.ratio
    }

    /// Rotation of the major axis in radians
    pub fn rotation(&self) -> f64 {
        self.major_axis.y.atan2(self.major_axis.x)
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_radii() {
        let ellipse = Ellipse::from_center_axis_ratio(Vector2::ZERO, Vector2::new(3.0, 4.0), 0.5);
        assert_eq!(ellipse.major_radius(), 5.0);
        assert_eq!(ellipse.minor_radius(), 2.5);
    }

    #[test]
    fn test_ellipse_rotation() {
        let ellipse = Ellipse::from_center_axis_ratio(Vector2::ZERO, Vector2::new(0.0, 2.0), 1.0);
        assert!((ellipse.rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
