//! Shared fixtures for integration tests

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use dxf_scene_rs::render::PrimitiveSink;
use dxf_scene_rs::{
    Circle, DrawPrimitive, DrawingData, Entity, Layer, Line, LwPolyline, MemorySource, Point,
    SceneModel, Vector2, ViewportTransform,
};

/// The standard 800x600 host viewport used across tests
pub const VIEW: (f64, f64) = (800.0, 600.0);

/// Install a test subscriber once so warning events show up under
/// `RUST_LOG`
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A small drawing: a line and a circle on layer "0", one circle on
/// "Walls", one point on "Defpoints"
pub fn sample_drawing() -> DrawingData {
    let mut walls_circle = Entity::Circle(Circle::from_center_radius(Vector2::new(5.0, 5.0), 2.0));
    walls_circle.common_mut().layer = "Walls".to_string();

    let mut defpoint = Entity::Point(Point::at(Vector2::new(2.0, 2.0)));
    defpoint.common_mut().layer = "Defpoints".to_string();

    DrawingData {
        layers: vec![
            Layer::new("0"),
            Layer::new("Walls"),
            Layer::new("Defpoints"),
        ],
        entities: vec![
            Entity::Line(Line::from_coords(0.0, 0.0, 10.0, 0.0)),
            walls_circle,
            defpoint,
        ],
    }
}

/// A source over [`sample_drawing`]
pub fn sample_source() -> MemorySource {
    MemorySource::new("plan.dxf", sample_drawing())
}

/// A scene loaded from [`sample_drawing`], plus its source
pub fn loaded_scene() -> (SceneModel, MemorySource) {
    init_tracing();
    let mut source = sample_source();
    let mut scene = SceneModel::new();
    scene
        .load(&mut source, VIEW)
        .expect("sample drawing loads");
    (scene, source)
}

/// A closed square polyline on the given layer, for fill-mode tests
pub fn closed_square(layer: &str) -> Entity {
    let mut entity = Entity::LwPolyline(LwPolyline::closed_from_points(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ]));
    entity.common_mut().layer = layer.to_string();
    entity
}

/// A sink that records the frames it receives, for asserting on render
/// output
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: usize,
    pub viewport_scale: f64,
    pub primitives: Vec<DrawPrimitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrimitiveSink for RecordingSink {
    fn begin_frame(&mut self, viewport: &ViewportTransform) {
        self.frames += 1;
        self.viewport_scale = viewport.scale();
        self.primitives.clear();
    }

    fn draw(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }
}
