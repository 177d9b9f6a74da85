//! Drawing entity types
//!
//! The scene models a drawing as a flat, ordered list of entities over the
//! nine kinds an interactive viewer draws. The set of kinds is closed, so
//! every per-kind algorithm (bounds, hit testing, rendering) dispatches
//! with an exhaustive `match` and adding a kind is a compile-checked
//! change.

use crate::types::{Color, Rgb};
use std::fmt;

pub mod arc;
pub mod circle;
pub mod ellipse;
pub mod line;
pub mod lwpolyline;
pub mod point;
pub mod polyline;
pub mod spline;
pub mod text;

pub use arc::Arc;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use lwpolyline::LwPolyline;
pub use point::Point;
pub use polyline::Polyline;
pub use spline::Spline;
pub use text::Text;

/// Common data shared by all entity kinds
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Name of the owning layer
    pub layer: String,
    /// ACI color value (sentinels included)
    pub color: Color,
    /// True-color override; wins over `color` when present
    pub true_color: Option<Rgb>,
    /// Linetype name, e.g. `CONTINUOUS` or `DASHED`
    pub linetype: String,
}

impl EntityCommon {
    /// Create common data with default settings (layer `"0"`, ByLayer color)
    pub fn new() -> Self {
        EntityCommon {
            layer: "0".to_string(),
            color: Color::ByLayer,
            true_color: None,
            linetype: "CONTINUOUS".to_string(),
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// The kind tag of an entity, used for counting and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Point,
    Line,
    Circle,
    Arc,
    Ellipse,
    LwPolyline,
    Polyline,
    Spline,
    Text,
}

impl EntityKind {
    /// The DXF type name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Point => "POINT",
            EntityKind::Line => "LINE",
            EntityKind::Circle => "CIRCLE",
            EntityKind::Arc => "ARC",
            EntityKind::Ellipse => "ELLIPSE",
            EntityKind::LwPolyline => "LWPOLYLINE",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::Spline => "SPLINE",
            EntityKind::Text => "TEXT",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drawing entity, tagged by kind
#[derive(Debug, Clone)]
pub enum Entity {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    LwPolyline(LwPolyline),
    Polyline(Polyline),
    Spline(Spline),
    Text(Text),
}

impl Entity {
    /// Get the kind tag
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Point(_) => EntityKind::Point,
            Entity::Line(_) => EntityKind::Line,
            Entity::Circle(_) => EntityKind::Circle,
            Entity::Arc(_) => EntityKind::Arc,
            Entity::Ellipse(_) => EntityKind::Ellipse,
            Entity::LwPolyline(_) => EntityKind::LwPolyline,
            Entity::Polyline(_) => EntityKind::Polyline,
            Entity::Spline(_) => EntityKind::Spline,
            Entity::Text(_) => EntityKind::Text,
        }
    }

    /// Get the common entity data
    pub fn common(&self) -> &EntityCommon {
        match self {
            Entity::Point(e) => &e.common,
            Entity::Line(e) => &e.common,
            Entity::Circle(e) => &e.common,
            Entity::Arc(e) => &e.common,
            Entity::Ellipse(e) => &e.common,
            Entity::LwPolyline(e) => &e.common,
            Entity::Polyline(e) => &e.common,
            Entity::Spline(e) => &e.common,
            Entity::Text(e) => &e.common,
        }
    }

    /// Get the common entity data mutably
    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            Entity::Point(e) => &mut e.common,
            Entity::Line(e) => &mut e.common,
            Entity::Circle(e) => &mut e.common,
            Entity::Arc(e) => &mut e.common,
            Entity::Ellipse(e) => &mut e.common,
            Entity::LwPolyline(e) => &mut e.common,
            Entity::Polyline(e) => &mut e.common,
            Entity::Spline(e) => &mut e.common,
            Entity::Text(e) => &mut e.common,
        }
    }

    /// Get the name of the owning layer
    pub fn layer(&self) -> &str {
        &self.common().layer
    }

    /// True for shapes that fill mode paints: circles and closed
    /// polylines/splines
    pub fn is_closed_shape(&self) -> bool {
        match self {
            Entity::Circle(_) => true,
            Entity::LwPolyline(p) => p.closed,
            Entity::Polyline(p) => p.closed,
            Entity::Spline(s) => s.closed,
            _ => false,
        }
    }
}
