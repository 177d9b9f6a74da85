//! 2D vector type used for both world and screen coordinates

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D point or direction in drawing (world) or device (screen) space.
///
/// The same type is used for both spaces; the [`ViewportTransform`]
/// documents which space a given value lives in.
///
/// [`ViewportTransform`]: crate::viewport::ViewportTransform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector2) -> f64 {
        (*self - *other).length()
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: &Vector2) -> Vector2 {
        Vector2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Vector2::ZERO
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_length() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_vector2_distance() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_vector2_midpoint() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 20.0);
        assert_eq!(a.midpoint(&b), Vector2::new(5.0, 10.0));
    }

    #[test]
    fn test_vector2_operations() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(-v1, Vector2::new(-1.0, -2.0));
    }
}
