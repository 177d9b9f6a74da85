//! Arc entity

use super::EntityCommon;
use crate::types::Vector2;

/// An arc entity (portion of a circle)
///
/// Angles are stored in radians, measured counter-clockwise from the
/// positive X axis.
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point of the arc
    pub center: Vector2,
    /// Radius of the arc
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
}

impl Arc {
    /// Create a new quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector2::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
        }
    }

    /// Create an arc from center, radius, and angles in radians
    pub fn from_center_radius_angles(
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }

    /// Get the swept angle in radians
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}
