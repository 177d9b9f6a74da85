//! Spline entity (NURBS curve data)

use super::EntityCommon;
use crate::types::Vector2;

/// A spline entity carrying raw B-spline data
///
/// The viewer never needs an exact curve: bounds use a coarse sampling of
/// the curve (see [`crate::bounds`]) and rendering hands the control data
/// to the external renderer.
#[derive(Debug, Clone)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Degree of the spline (typically 3 for cubic)
    pub degree: i32,
    /// Knot vector
    pub knots: Vec<f64>,
    /// Control points
    pub control_points: Vec<Vector2>,
    /// Fit points, when the document recorded them
    pub fit_points: Vec<Vector2>,
    /// Whether the curve is closed
    pub closed: bool,
}

impl Spline {
    /// Create a new empty cubic spline
    pub fn new() -> Self {
        Spline {
            common: EntityCommon::new(),
            degree: 3,
            knots: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
            closed: false,
        }
    }

    /// Create a spline from control points with a uniform clamped knot
    /// vector
    pub fn from_control_points(degree: i32, control_points: Vec<Vector2>) -> Self {
        let mut spline = Spline {
            degree,
            control_points,
            ..Self::new()
        };
        spline.knots = uniform_clamped_knots(degree, spline.control_points.len());
        spline
    }

    /// Number of control points
    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }

    /// A valid B-spline needs `control_points + degree + 1` knots
    pub fn has_valid_knots(&self) -> bool {
        self.degree > 0
            && self.control_points.len() > self.degree as usize
            && self.knots.len() == self.control_points.len() + self.degree as usize + 1
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a clamped uniform knot vector for the given degree and control
/// point count. Returns an empty vector when the curve is under-determined.
pub fn uniform_clamped_knots(degree: i32, control_point_count: usize) -> Vec<f64> {
    let p = degree.max(0) as usize;
    if control_point_count <= p {
        return Vec::new();
    }

    let n = control_point_count + p + 1;
    let interior = control_point_count - p;
    let mut knots = Vec::with_capacity(n);
    for i in 0..n {
        let knot = if i <= p {
            0.0
        } else if i >= n - p - 1 {
            interior as f64
        } else {
            (i - p) as f64
        };
        knots.push(knot);
    }
    knots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_clamped_knots() {
        // Cubic with 4 control points: Bezier-like, knots [0,0,0,0,1,1,1,1].
        let knots = uniform_clamped_knots(3, 4);
        assert_eq!(knots, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_under_determined_curve_has_no_knots() {
        assert!(uniform_clamped_knots(3, 3).is_empty());
    }

    #[test]
    fn test_valid_knot_check() {
        let spline = Spline::from_control_points(
            3,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 2.0),
                Vector2::new(2.0, -1.0),
                Vector2::new(3.0, 0.0),
            ],
        );
        assert!(spline.has_valid_knots());

        let mut broken = spline.clone();
        broken.knots.pop();
        assert!(!broken.has_valid_knots());
    }
}
