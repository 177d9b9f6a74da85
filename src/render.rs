//! Toolkit-neutral render output
//!
//! The scene does not paint; it lowers entities into [`DrawPrimitive`]
//! values and hands them to a host-provided [`PrimitiveSink`]. Shapes stay
//! in world coordinates, the sink applies the viewport transform it
//! received in `begin_frame`. This keeps the drawing rules (pen
//! resolution, highlight, fill, linetype mapping) testable without a GUI.

use crate::entities::Entity;
use crate::notification::WarningLog;
use crate::resolver::resolve_pen;
use crate::tables::LayerTable;
use crate::types::{Handle, Rgb, Vector2};
use crate::viewport::ViewportTransform;

/// Pen color for selected entities
pub const HIGHLIGHT_COLOR: Rgb = Rgb::new(52, 152, 219);

/// Pen width for selected entities, in pixels
pub const HIGHLIGHT_WIDTH: u32 = 3;

/// Alpha applied to fill-mode interiors (out of 255)
pub const FILL_ALPHA: u8 = 100;

/// On-screen radius of the point marker, in pixels
const POINT_MARKER_PX: f64 = 5.0;

/// Stroke pattern, mapped from the entity's linetype name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Map a linetype table name to a stroke pattern; unknown names draw
    /// solid
    pub fn from_linetype(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "DASHED" => LineStyle::Dashed,
            "DOTTED" | "DOT" => LineStyle::Dotted,
            "DASHDOT" | "DASHDOTTED" => LineStyle::DashDot,
            _ => LineStyle::Solid,
        }
    }
}

/// Pen configuration for one primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub line: LineStyle,
    /// Width in pixels, unscaled by zoom
    pub width: u32,
}

/// Interior paint for closed shapes when fill mode is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillStyle {
    pub color: Rgb,
    pub alpha: u8,
}

/// World-space geometry of one primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Point marker; `radius` is pre-divided by the viewport scale so the
    /// marker stays a constant on-screen size
    Marker { center: Vector2, radius: f64 },
    Segment { start: Vector2, end: Vector2 },
    Circle { center: Vector2, radius: f64 },
    /// Angles in radians, counter-clockwise from +X
    Arc {
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Ellipse {
        center: Vector2,
        major_axis: Vector2,
        ratio: f64,
    },
    Polyline { points: Vec<Vector2>, closed: bool },
    /// Raw curve data; evaluating or approximating the curve is the
    /// sink's concern (see [`crate::bounds::sample_spline`])
    Spline {
        degree: i32,
        knots: Vec<f64>,
        control_points: Vec<Vector2>,
        fit_points: Vec<Vector2>,
        closed: bool,
    },
    Text {
        insert: Vector2,
        content: String,
        height: f64,
        /// Rotation in degrees
        rotation: f64,
    },
}

/// One drawable unit: geometry plus resolved pen and optional fill
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPrimitive {
    pub color: Rgb,
    pub stroke: StrokeStyle,
    pub fill: Option<FillStyle>,
    pub shape: Shape,
}

/// Receiver of one rendered frame.
///
/// `begin_frame` is called exactly once per render, before any `draw`;
/// the sink maps world shapes to pixels with the given transform.
pub trait PrimitiveSink {
    fn begin_frame(&mut self, viewport: &ViewportTransform);
    fn draw(&mut self, primitive: DrawPrimitive);
}

/// Lower an entity's geometry to a world-space [`Shape`].
///
/// `scale` sizes the point marker. `None` only when there is no geometry
/// at all.
pub fn entity_shape(entity: &Entity, scale: f64) -> Option<Shape> {
    match entity {
        Entity::Point(p) => Some(Shape::Marker {
            center: p.location,
            radius: POINT_MARKER_PX / scale,
        }),
        Entity::Line(l) => Some(Shape::Segment {
            start: l.start,
            end: l.end,
        }),
        Entity::Circle(c) => Some(Shape::Circle {
            center: c.center,
            radius: c.radius,
        }),
        Entity::Arc(a) => Some(Shape::Arc {
            center: a.center,
            radius: a.radius,
            start_angle: a.start_angle,
            end_angle: a.end_angle,
        }),
        Entity::Ellipse(e) => Some(Shape::Ellipse {
            center: e.center,
            major_axis: e.major_axis,
            ratio: e.ratio,
        }),
        Entity::LwPolyline(p) => {
            if p.points.is_empty() {
                return None;
            }
            Some(Shape::Polyline {
                points: p.points.clone(),
                closed: p.closed,
            })
        }
        Entity::Polyline(p) => {
            if p.vertices.is_empty() {
                return None;
            }
            Some(Shape::Polyline {
                points: p.vertices.clone(),
                closed: p.closed,
            })
        }
        Entity::Spline(s) => {
            if s.control_points.is_empty() && s.fit_points.is_empty() {
                return None;
            }
            Some(Shape::Spline {
                degree: s.degree,
                knots: s.knots.clone(),
                control_points: s.control_points.clone(),
                fit_points: s.fit_points.clone(),
                closed: s.closed,
            })
        }
        Entity::Text(t) => Some(Shape::Text {
            insert: t.insert,
            content: t.text.clone(),
            height: t.height,
            rotation: t.rotation,
        }),
    }
}

/// Lower a single entity into a [`DrawPrimitive`].
///
/// Selected entities draw with the fixed highlight pen regardless of their
/// own color and linetype. Fill mode paints closed shapes with their pen
/// color at [`FILL_ALPHA`], except entities on layer `"0"`.
#[allow(clippy::too_many_arguments)]
pub fn entity_primitive(
    entity: &Entity,
    handle: Handle,
    layers: &LayerTable,
    highlighted: bool,
    fill_mode: bool,
    scale: f64,
    warnings: &mut WarningLog,
) -> Option<DrawPrimitive> {
    let shape = entity_shape(entity, scale)?;

    let (color, stroke) = if highlighted {
        (
            HIGHLIGHT_COLOR,
            StrokeStyle {
                line: LineStyle::Solid,
                width: HIGHLIGHT_WIDTH,
            },
        )
    } else {
        (
            resolve_pen(entity.common(), layers, Some(handle), warnings),
            StrokeStyle {
                line: LineStyle::from_linetype(&entity.common().linetype),
                width: 1,
            },
        )
    };

    let fill = if fill_mode && entity.is_closed_shape() && entity.layer() != "0" {
        Some(FillStyle {
            color,
            alpha: FILL_ALPHA,
        })
    } else {
        None
    };

    Some(DrawPrimitive {
        color,
        stroke,
        fill,
        shape,
    })
}
