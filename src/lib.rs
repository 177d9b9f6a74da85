//! # dxf-scene-rs
//!
//! The interactive core of a 2D CAD drawing viewer: scene state, viewport
//! math, marquee selection and color resolution, with no GUI toolkit and
//! no file parsing attached.
//!
//! The host application supplies two collaborators: a
//! [`DrawingSource`](document::DrawingSource) that parses the document
//! into layers and entities, and a
//! [`PrimitiveSink`](render::PrimitiveSink) that paints the world-space
//! primitives the scene emits. Everything in between, pan/zoom, fit,
//! selection gestures, layer visibility, fill mode, property edits and
//! deletion, lives in [`SceneModel`](scene::SceneModel).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_scene_rs::{MemorySource, SceneModel};
//!
//! let mut scene = SceneModel::new();
//! let summary = scene.load(&mut source, (800.0, 600.0))?;
//! println!("{}: {} entities", summary.filename, summary.entity_total());
//!
//! // Wire toolkit events into the scene...
//! scene.on_wheel(cursor, delta);
//! if scene.take_redraw_request() {
//!     scene.render(&mut my_sink);
//! }
//! # Ok::<(), dxf_scene_rs::SceneError>(())
//! ```
//!
//! ## Design
//!
//! - Entities are a closed enum over nine kinds; bounds, hit testing and
//!   rendering dispatch with exhaustive matches.
//! - Entities live in an arena keyed by stable [`Handle`]s; the selection
//!   is a set of handles, not references.
//! - Per-entity failures never abort a load or redraw: they are skipped
//!   and recorded in the scene's [`WarningLog`](notification::WarningLog).

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bounds;
pub mod document;
pub mod entities;
pub mod error;
pub mod input;
pub mod notification;
pub mod render;
pub mod resolver;
pub mod scene;
pub mod selection;
pub mod tables;
pub mod types;
pub mod viewport;

// Re-export commonly used types
pub use error::{Result, SceneError};
pub use types::{aci_to_rgb, BoundingBox2D, Color, Handle, Rgb, Vector2};

// Re-export entity types
pub use entities::{
    Arc, Circle, Ellipse, Entity, EntityCommon, EntityKind, Line, LwPolyline, Point, Polyline,
    Spline, Text,
};

pub use document::{DrawingData, DrawingSource, MemorySource};
pub use notification::{Warning, WarningKind, WarningLog};
pub use render::{DrawPrimitive, FillStyle, LineStyle, PrimitiveSink, Shape, StrokeStyle};
pub use scene::{EntityPatch, GeometryPatch, SceneModel, SceneSummary};
pub use selection::Selection;
pub use tables::{Layer, LayerTable};
pub use viewport::{ViewportTransform, ZoomDirection};
