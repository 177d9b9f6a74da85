//! Marquee selection: screen rectangle to world bounds, approximate
//! containment, and the selected-handle set
//!
//! Hit testing is deliberately coarse, matching the legacy behavior: a
//! line or point is selected when an endpoint lands inside the marquee, a
//! circle or arc when its *center* does (radius ignored), a polyline when
//! any vertex does. Ellipses, splines and text are not selectable by the
//! marquee at all.

use ahash::AHashSet;
use crate::entities::Entity;
use crate::types::{BoundingBox2D, Handle, Vector2};
use crate::viewport::ViewportTransform;

/// The set of currently selected entities, tracked by handle
///
/// Handles give reference identity: two geometrically identical entities
/// remain distinct selection targets.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    handles: AHashSet<Handle>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Selection {
            handles: AHashSet::new(),
        }
    }

    /// Add a handle to the selection
    pub fn insert(&mut self, handle: Handle) {
        self.handles.insert(handle);
    }

    /// Remove a handle from the selection
    pub fn remove(&mut self, handle: Handle) {
        self.handles.remove(&handle);
    }

    /// Check whether a handle is selected
    pub fn contains(&self, handle: Handle) -> bool {
        self.handles.contains(&handle)
    }

    /// Number of selected entities
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterate over the selected handles (unordered)
    pub fn iter(&self) -> impl Iterator<Item = Handle> + '_ {
        self.handles.iter().copied()
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

/// Convert a marquee given by two screen corners (any order) into a
/// normalized world-space box
pub fn marquee_world_bounds(
    viewport: &ViewportTransform,
    corner_a: Vector2,
    corner_b: Vector2,
) -> BoundingBox2D {
    BoundingBox2D::from_corners(
        viewport.screen_to_world(corner_a),
        viewport.screen_to_world(corner_b),
    )
}

/// Approximate containment test of an entity against a world-space
/// marquee box
pub fn hit_test(entity: &Entity, bounds: &BoundingBox2D) -> bool {
    match entity {
        Entity::Line(l) => bounds.contains(l.start) || bounds.contains(l.end),
        Entity::Point(p) => bounds.contains(p.location),
        // Center only; the rendered radius may extend outside the marquee.
        Entity::Circle(c) => bounds.contains(c.center),
        Entity::Arc(a) => bounds.contains(a.center),
        Entity::LwPolyline(p) => p.points.iter().any(|v| bounds.contains(*v)),
        Entity::Polyline(p) => p.vertices.iter().any(|v| bounds.contains(*v)),
        Entity::Ellipse(_) | Entity::Spline(_) | Entity::Text(_) => false,
    }
}
