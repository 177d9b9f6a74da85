//! Viewport transform: world/screen mapping, fit-to-content, zoom and pan
//!
//! World space is the drawing's own coordinate system with Y increasing
//! upward; screen space is device pixels with Y increasing downward. The
//! transform is `screen = (world.x * scale + pan_x, -world.y * scale +
//! pan_y)`, so `pan` is the pixel position of the world origin after
//! scaling and the Y flip.

use crate::types::{BoundingBox2D, Vector2};
use std::fmt;

/// Zoom factor applied per wheel step
const ZOOM_STEP: f64 = 1.1;

/// Maximum zoom, expressed as a multiple of the fitted minimum scale
const MAX_ZOOM_RATIO: f64 = 20.0;

/// Absolute floor for the fitted scale, guarding against degenerate
/// content extents
const SCALE_FLOOR: f64 = 1e-4;

/// Padding added on each side when fitting content (15% of the extent)
const FIT_PADDING: f64 = 0.15;

/// Which way a wheel step zooms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The pan/zoom state of the drawing canvas
///
/// Reset (via [`fit_to_content`]) on every scene load; mutated by wheel
/// zoom and drag pan; never persisted. Scale is clamped to
/// `[min_scale, min_scale * 20]`; pan is unclamped, the user may pan
/// arbitrarily far.
///
/// [`fit_to_content`]: ViewportTransform::fit_to_content
#[derive(Debug, Clone)]
pub struct ViewportTransform {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    min_scale: f64,
}

impl ViewportTransform {
    /// Create an identity-ish transform; the first fit replaces it
    pub fn new() -> Self {
        ViewportTransform {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            min_scale: 0.5,
        }
    }

    /// Current world-units-to-pixels scale
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pixel offset of the scaled world origin
    pub fn pan(&self) -> Vector2 {
        Vector2::new(self.pan_x, self.pan_y)
    }

    /// Smallest allowed scale, set at fit time
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed scale
    pub fn max_scale(&self) -> f64 {
        self.min_scale * MAX_ZOOM_RATIO
    }

    /// Frame the given content box in a viewport of the given pixel size.
    ///
    /// Pads the extents by 15% per side, picks the axis-limiting scale
    /// (floored at 1e-4), and centers the box midpoint, accounting for
    /// the Y flip. A zero-extent axis contributes no constraint. Also
    /// establishes `min_scale` as half the fitted scale.
    pub fn fit_to_content(&mut self, bounds: &BoundingBox2D, view_width: f64, view_height: f64) {
        let padded_width = bounds.width() * (1.0 + 2.0 * FIT_PADDING);
        let padded_height = bounds.height() * (1.0 + 2.0 * FIT_PADDING);

        let scale_x = if padded_width != 0.0 {
            view_width / padded_width
        } else {
            1.0
        };
        let scale_y = if padded_height != 0.0 {
            view_height / padded_height
        } else {
            1.0
        };

        self.scale = scale_x.min(scale_y).max(SCALE_FLOOR);

        let center = bounds.center();
        self.pan_x = view_width / 2.0 - center.x * self.scale;
        self.pan_y = view_height / 2.0 + center.y * self.scale;

        self.min_scale = self.scale * 0.5;
    }

    /// Map a world point to screen pixels
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        Vector2::new(
            world.x * self.scale + self.pan_x,
            -world.y * self.scale + self.pan_y,
        )
    }

    /// Map a screen pixel to world coordinates; exact inverse of
    /// [`world_to_screen`]
    ///
    /// [`world_to_screen`]: ViewportTransform::world_to_screen
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        Vector2::new(
            (screen.x - self.pan_x) / self.scale,
            (self.pan_y - screen.y) / self.scale,
        )
    }

    /// Zoom one step at the given cursor position, keeping the world
    /// point under the cursor fixed on screen.
    pub fn zoom_at(&mut self, cursor: Vector2, direction: ZoomDirection) {
        let anchor = self.screen_to_world(cursor);

        let proposed = match direction {
            ZoomDirection::In => self.scale * ZOOM_STEP,
            ZoomDirection::Out => self.scale / ZOOM_STEP,
        };
        self.scale = proposed.clamp(self.min_scale, self.max_scale());

        // Re-solve pan so screen_to_world(cursor) == anchor at the new
        // scale.
        self.pan_x = cursor.x - anchor.x * self.scale;
        self.pan_y = cursor.y + anchor.y * self.scale;
    }

    /// Pan by a raw screen-pixel delta
    pub fn pan_by(&mut self, delta: Vector2) {
        self.pan_x += delta.x;
        self.pan_y += delta.y;
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewportTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale {:.4} | pan ({:.1}, {:.1})",
            self.scale, self.pan_x, self.pan_y
        )
    }
}
