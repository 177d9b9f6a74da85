//! Text entity

use super::EntityCommon;
use crate::types::Vector2;

/// A single-line text entity
#[derive(Debug, Clone)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (baseline left)
    pub insert: Vector2,
    /// Text content
    pub text: String,
    /// Text height in world units
    pub height: f64,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f64,
}

impl Text {
    /// Create a new empty text entity
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            insert: Vector2::ZERO,
            text: String::new(),
            height: 1.0,
            rotation: 0.0,
        }
    }

    /// Create a text entity with content at an insertion point
    pub fn from_content(insert: Vector2, text: impl Into<String>, height: f64) -> Self {
        Text {
            insert,
            text: text.into(),
            height,
            ..Self::new()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}
