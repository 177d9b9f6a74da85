//! The scene façade: owned drawing state and every documented mutation
//!
//! `SceneModel` owns the entity arena, layer table, selection, viewport
//! and warning log, and is the single mutation path for all of them. The
//! host wires its toolkit events into the mouse handlers and its paint
//! callback into [`render`]; everything in between is plain synchronous
//! state.
//!
//! [`render`]: SceneModel::render

use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::bounds::entity_bounds_logged;
use crate::document::DrawingSource;
use crate::entities::{Entity, EntityKind};
use crate::error::{Result, SceneError};
use crate::input::{DragState, Modifiers, MouseButton};
use crate::notification::WarningLog;
use crate::render::{entity_primitive, PrimitiveSink};
use crate::resolver::resolve_pen;
use crate::selection::{hit_test, marquee_world_bounds, Selection};
use crate::tables::LayerTable;
use crate::types::{BoundingBox2D, Handle, Rgb, Vector2};
use crate::viewport::{ViewportTransform, ZoomDirection};

/// Load-time summary for the host's status display
///
/// Counts follow the Defpoints convention: the layer and the entities on
/// it exist, render and select normally, but stay out of the reported
/// numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSummary {
    /// Display name of the loaded document
    pub filename: String,
    /// Layer count, Defpoints excluded
    pub layer_count: usize,
    /// Entity count per kind, entities on Defpoints excluded
    pub entity_counts: BTreeMap<EntityKind, usize>,
}

impl SceneSummary {
    /// Total counted entities
    pub fn entity_total(&self) -> usize {
        self.entity_counts.values().sum()
    }
}

/// Kind-specific geometry fields of a property edit
///
/// Values arrive as strings, the property-dialog contract: the host shows
/// text fields prefilled with current values and submits them all back.
/// Angles are given in degrees and stored in radians.
#[derive(Debug, Clone, Default)]
pub enum GeometryPatch {
    /// No geometry change
    #[default]
    None,
    Point {
        x: String,
        y: String,
    },
    Line {
        start_x: String,
        start_y: String,
        end_x: String,
        end_y: String,
    },
    Circle {
        center_x: String,
        center_y: String,
        radius: String,
    },
    Arc {
        center_x: String,
        center_y: String,
        radius: String,
        start_angle: String,
        end_angle: String,
    },
    Text {
        content: String,
        insert_x: String,
        insert_y: String,
        height: String,
    },
}

/// One property edit: optional layer move, optional explicit RGB, optional
/// geometry change
#[derive(Debug, Clone, Default)]
pub struct EntityPatch {
    pub layer: Option<String>,
    pub true_color: Option<Rgb>,
    pub geometry: GeometryPatch,
}

/// Parsed counterpart of [`GeometryPatch`], produced before any mutation
enum ParsedGeometry {
    None,
    Point(Vector2),
    Line(Vector2, Vector2),
    Circle(Vector2, f64),
    Arc(Vector2, f64, f64, f64),
    Text(String, Vector2, f64),
}

fn parse_num(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| SceneError::validation(field, value))
}

impl GeometryPatch {
    /// Parse every field; no mutation happens until all of them validate
    fn parse(&self) -> Result<ParsedGeometry> {
        Ok(match self {
            GeometryPatch::None => ParsedGeometry::None,
            GeometryPatch::Point { x, y } => {
                ParsedGeometry::Point(Vector2::new(parse_num("X", x)?, parse_num("Y", y)?))
            }
            GeometryPatch::Line {
                start_x,
                start_y,
                end_x,
                end_y,
            } => ParsedGeometry::Line(
                Vector2::new(parse_num("Start X", start_x)?, parse_num("Start Y", start_y)?),
                Vector2::new(parse_num("End X", end_x)?, parse_num("End Y", end_y)?),
            ),
            GeometryPatch::Circle {
                center_x,
                center_y,
                radius,
            } => ParsedGeometry::Circle(
                Vector2::new(
                    parse_num("Center X", center_x)?,
                    parse_num("Center Y", center_y)?,
                ),
                parse_num("Radius", radius)?,
            ),
            GeometryPatch::Arc {
                center_x,
                center_y,
                radius,
                start_angle,
                end_angle,
            } => ParsedGeometry::Arc(
                Vector2::new(
                    parse_num("Center X", center_x)?,
                    parse_num("Center Y", center_y)?,
                ),
                parse_num("Radius", radius)?,
                // Dialog fields are degrees; entities store radians.
                parse_num("Start Angle", start_angle)?.to_radians(),
                parse_num("End Angle", end_angle)?.to_radians(),
            ),
            GeometryPatch::Text {
                content,
                insert_x,
                insert_y,
                height,
            } => ParsedGeometry::Text(
                content.clone(),
                Vector2::new(
                    parse_num("Insert X", insert_x)?,
                    parse_num("Insert Y", insert_y)?,
                ),
                parse_num("Height", height)?,
            ),
        })
    }
}

/// The drawing scene: entities, layers, selection, viewport and flags
#[derive(Debug, Default)]
pub struct SceneModel {
    filename: String,
    entities: IndexMap<Handle, Entity>,
    layers: LayerTable,
    selection: Selection,
    viewport: ViewportTransform,
    fill_mode: bool,
    warnings: WarningLog,
    drag: DragState,
    needs_redraw: bool,
}

impl SceneModel {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a drawing from the document collaborator.
    ///
    /// Nothing is committed until `read` succeeds; a failed load leaves
    /// the prior scene untouched and returns a [`SceneError::Load`] that
    /// names the document. On success the previous selection, warnings
    /// and drag state are cleared, handles are allocated 1-based in
    /// supply order, and the viewport is refit to the combined extents
    /// (left alone when the drawing has none).
    pub fn load(
        &mut self,
        source: &mut dyn DrawingSource,
        view_size: (f64, f64),
    ) -> Result<SceneSummary> {
        let filename = source.filename().to_string();
        let data = source.read().map_err(|err| {
            SceneError::load(format!("loading {filename}"), err.to_string())
        })?;

        // Read succeeded: commit.
        self.filename = filename.clone();
        self.layers = LayerTable::from_layers(data.layers);
        self.entities = data
            .entities
            .into_iter()
            .enumerate()
            .map(|(i, entity)| (Handle::new(i as u64 + 1), entity))
            .collect();
        self.selection.clear();
        self.warnings.clear();
        self.drag = DragState::Idle;

        let mut bounds: Option<BoundingBox2D> = None;
        for (handle, entity) in &self.entities {
            // Logs a geometry warning per malformed spline.
            if let Some(bbox) = entity_bounds_logged(entity, *handle, &mut self.warnings) {
                bounds = Some(match bounds {
                    Some(acc) => acc.merge(&bbox),
                    None => bbox,
                });
            }
            // Surface unresolvable colors now so render can stay a pure
            // read later.
            resolve_pen(entity.common(), &self.layers, Some(*handle), &mut self.warnings);
        }

        if let Some(bounds) = bounds {
            self.viewport.fit_to_content(&bounds, view_size.0, view_size.1);
        }

        let summary = self.summary();
        info!(
            file = %summary.filename,
            layers = summary.layer_count,
            entities = summary.entity_total(),
            "scene loaded"
        );
        self.needs_redraw = true;
        Ok(summary)
    }

    /// Build the current summary (filename, counted layers and entities)
    pub fn summary(&self) -> SceneSummary {
        let mut entity_counts = BTreeMap::new();
        for entity in self.entities.values() {
            if entity.layer().eq_ignore_ascii_case("Defpoints") {
                continue;
            }
            *entity_counts.entry(entity.kind()).or_insert(0) += 1;
        }
        SceneSummary {
            filename: self.filename.clone(),
            layer_count: self.layers.display_count(),
            entity_counts,
        }
    }

    /// Show or hide a layer (case-insensitive); unknown names are ignored
    pub fn set_layer_visible(&mut self, name: &str, visible: bool) {
        if let Some(layer) = self.layers.get_mut(name) {
            layer.visible = visible;
            self.needs_redraw = true;
        }
    }

    /// Flip fill mode for closed shapes; returns the new state
    pub fn toggle_fill_mode(&mut self) -> bool {
        self.fill_mode = !self.fill_mode;
        self.needs_redraw = true;
        self.fill_mode
    }

    /// Current fill-mode state
    pub fn fill_mode(&self) -> bool {
        self.fill_mode
    }

    /// Apply a property edit to one entity.
    ///
    /// Every field is parsed before anything mutates: a parse failure
    /// yields [`SceneError::Validation`], a geometry patch for a
    /// different kind yields [`SceneError::KindMismatch`], and in both
    /// cases the entity is untouched.
    pub fn update_entity_properties(&mut self, handle: Handle, patch: &EntityPatch) -> Result<()> {
        let parsed = patch.geometry.parse()?;

        let entity = self
            .entities
            .get_mut(&handle)
            .ok_or(SceneError::EntityNotFound(handle))?;

        match (&parsed, &*entity) {
            (ParsedGeometry::None, _)
            | (ParsedGeometry::Point(_), Entity::Point(_))
            | (ParsedGeometry::Line(..), Entity::Line(_))
            | (ParsedGeometry::Circle(..), Entity::Circle(_))
            | (ParsedGeometry::Arc(..), Entity::Arc(_))
            | (ParsedGeometry::Text(..), Entity::Text(_)) => {}
            _ => return Err(SceneError::KindMismatch(entity.kind().as_str())),
        }

        if let Some(layer) = &patch.layer {
            entity.common_mut().layer = layer.clone();
        }
        if let Some(rgb) = patch.true_color {
            entity.common_mut().true_color = Some(rgb);
        }

        match (parsed, entity) {
            (ParsedGeometry::Point(location), Entity::Point(p)) => p.location = location,
            (ParsedGeometry::Line(start, end), Entity::Line(l)) => {
                l.start = start;
                l.end = end;
            }
            (ParsedGeometry::Circle(center, radius), Entity::Circle(c)) => {
                c.center = center;
                c.radius = radius;
            }
            (ParsedGeometry::Arc(center, radius, start, end), Entity::Arc(a)) => {
                a.center = center;
                a.radius = radius;
                a.start_angle = start;
                a.end_angle = end;
            }
            (ParsedGeometry::Text(content, insert, height), Entity::Text(t)) => {
                t.text = content;
                t.insert = insert;
                t.height = height;
            }
            _ => {}
        }

        debug!(handle = %handle, "entity properties updated");
        self.needs_redraw = true;
        Ok(())
    }

    /// Delete every selected entity, mirroring each removal to the
    /// document collaborator; clears the selection. No-op when nothing
    /// is selected.
    pub fn delete_selected(&mut self, source: &mut dyn DrawingSource) {
        if self.selection.is_empty() {
            return;
        }

        let handles: Vec<Handle> = self.selection.iter().collect();
        for handle in handles {
            if self.entities.shift_remove(&handle).is_some() {
                source.remove_entity(handle);
            }
        }
        self.selection.clear();
        self.needs_redraw = true;
    }

    /// Drop the selection without touching entities
    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.needs_redraw = true;
        }
        self.selection.clear();
    }

    /// Select entities whose geometry falls in the given world-space box.
    ///
    /// Clears first unless `additive`; entities on hidden layers are
    /// never selected.
    pub fn select_in_rect(&mut self, rect: &BoundingBox2D, additive: bool) {
        if !additive {
            self.selection.clear();
        }
        for (handle, entity) in &self.entities {
            if !self.layer_visible(entity.layer()) {
                continue;
            }
            if hit_test(entity, rect) {
                self.selection.insert(*handle);
            }
        }
        self.needs_redraw = true;
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current viewport transform
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Look up an entity by handle
    pub fn entity(&self, handle: Handle) -> Option<&Entity> {
        self.entities.get(&handle)
    }

    /// Iterate entities in draw order with their handles
    pub fn entities(&self) -> impl Iterator<Item = (Handle, &Entity)> {
        self.entities.iter().map(|(h, e)| (*h, e))
    }

    /// Number of entities in the scene
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Layer table, for swatch listings
    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// Mouse button pressed: plain left starts a pan, Ctrl+left starts a
    /// marquee
    pub fn on_mouse_press(&mut self, pos: Vector2, button: MouseButton, mods: Modifiers) {
        if button != MouseButton::Left {
            return;
        }
        self.drag = if mods.contains(Modifiers::CONTROL) {
            DragState::Marquee {
                anchor: pos,
                current: pos,
            }
        } else {
            DragState::Pan { last: pos }
        };
    }

    /// Mouse moved: advance the in-flight gesture, if any
    pub fn on_mouse_move(&mut self, pos: Vector2) {
        match self.drag {
            DragState::Idle => {}
            DragState::Pan { last } => {
                self.viewport.pan_by(pos - last);
                self.drag = DragState::Pan { last: pos };
                self.needs_redraw = true;
            }
            DragState::Marquee { anchor, .. } => {
                self.drag = DragState::Marquee {
                    anchor,
                    current: pos,
                };
                self.needs_redraw = true;
            }
        }
    }

    /// Mouse button released: a marquee commits its selection, additive
    /// when Ctrl is still held
    pub fn on_mouse_release(&mut self, pos: Vector2, button: MouseButton, mods: Modifiers) {
        if button != MouseButton::Left {
            return;
        }
        if let DragState::Marquee { anchor, .. } = self.drag {
            let rect = marquee_world_bounds(&self.viewport, anchor, pos);
            self.select_in_rect(&rect, mods.contains(Modifiers::CONTROL));
        }
        self.drag = DragState::Idle;
        self.needs_redraw = true;
    }

    /// Wheel scrolled: zoom one step at the cursor; positive delta zooms
    /// in, zero does nothing
    pub fn on_wheel(&mut self, cursor: Vector2, delta: f64) {
        if delta == 0.0 {
            return;
        }
        let direction = if delta > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        self.viewport.zoom_at(cursor, direction);
        self.needs_redraw = true;
    }

    /// Emit the current frame into the sink.
    ///
    /// Pure read: entities in draw order, hidden layers skipped (an
    /// entity whose layer is missing from the table still renders),
    /// selected entities drawn with the highlight pen. Calling twice with
    /// no intervening mutation emits identical streams.
    pub fn render(&self, sink: &mut dyn PrimitiveSink) {
        sink.begin_frame(&self.viewport);

        // Unresolvable colors were already logged at load; the scratch
        // log keeps this method a pure read.
        let mut scratch = WarningLog::new();
        for (handle, entity) in &self.entities {
            if !self.layer_visible(entity.layer()) {
                continue;
            }
            let highlighted = self.selection.contains(*handle);
            if let Some(primitive) = entity_primitive(
                entity,
                *handle,
                &self.layers,
                highlighted,
                self.fill_mode,
                self.viewport.scale(),
                &mut scratch,
            ) {
                sink.draw(primitive);
            }
        }
    }

    /// Accumulated non-fatal warnings since the last load
    pub fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    /// Report and clear the redraw flag set by every mutation
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // A missing layer record renders rather than hides.
    fn layer_visible(&self, name: &str) -> bool {
        self.layers.get(name).map_or(true, |layer| layer.visible)
    }
}
