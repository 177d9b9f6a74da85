//! Layer table entry

use crate::types::{Color, Rgb};

/// A drawing layer
///
/// Layer identity is case-insensitive; the table normalizes lookups while
/// the `name` field keeps the original spelling for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name as recorded in the document
    pub name: String,
    /// ACI color value
    pub color: Color,
    /// True-color override; wins over `color` when present
    pub true_color: Option<Rgb>,
    /// Whether entities on this layer are drawn
    pub visible: bool,
}

impl Layer {
    /// Create a new visible layer with default (white) color
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            color: Color::Index(7),
            true_color: None,
            visible: true,
        }
    }

    /// Create a layer with a specific ACI color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }

    /// Create a layer with a true-color override
    pub fn with_true_color(name: impl Into<String>, rgb: Rgb) -> Self {
        Layer {
            true_color: Some(rgb),
            ..Self::new(name)
        }
    }

    /// The conventionally hidden definition-points layer.
    ///
    /// Excluded from informational counts only; still rendered and still
    /// selectable.
    pub fn is_defpoints(&self) -> bool {
        self.name.eq_ignore_ascii_case("defpoints")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::new("Walls");
        assert_eq!(layer.color, Color::Index(7));
        assert!(layer.visible);
        assert!(layer.true_color.is_none());
    }

    #[test]
    fn test_defpoints_any_case() {
        assert!(Layer::new("Defpoints").is_defpoints());
        assert!(Layer::new("DEFPOINTS").is_defpoints());
        assert!(Layer::new("defpoints").is_defpoints());
        assert!(!Layer::new("0").is_defpoints());
    }
}
