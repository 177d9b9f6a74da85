//! Per-entity and whole-scene bounding boxes
//!
//! Extents are deliberately approximate where the original viewer was:
//! arcs use the full-circle box rather than the swept span, ellipses
//! ignore rotation, and text gets a crude character-count box with no
//! font metrics. These simplifications are part of the documented
//! behavior, not shortcuts to fix.

use crate::entities::{Entity, Spline};
use crate::notification::{WarningKind, WarningLog};
use crate::types::{BoundingBox2D, Handle, Vector2};

/// Number of curve samples used for spline extents
const SPLINE_BOUNDS_SAMPLES: usize = 100;

/// Compute the bounding box of a single entity.
///
/// Returns `None` when the entity has no extent to contribute (an empty
/// polyline, a spline with no points at all).
pub fn entity_bounds(entity: &Entity) -> Option<BoundingBox2D> {
    entity_bounds_inner(entity, None)
}

/// Like [`entity_bounds`], recording a [`WarningKind::Geometry`] entry
/// when a spline falls back from curve sampling to its control points.
pub fn entity_bounds_logged(
    entity: &Entity,
    handle: Handle,
    warnings: &mut WarningLog,
) -> Option<BoundingBox2D> {
    entity_bounds_inner(entity, Some((handle, warnings)))
}

fn entity_bounds_inner(
    entity: &Entity,
    log: Option<(Handle, &mut WarningLog)>,
) -> Option<BoundingBox2D> {
    match entity {
        Entity::Point(p) => Some(BoundingBox2D::from_point(p.location)),
        Entity::Line(l) => BoundingBox2D::from_points(&[l.start, l.end]),
        Entity::Circle(c) => Some(radius_box(c.center, c.radius, c.radius)),
        // Full-circle box, not the arc span.
        Entity::Arc(a) => Some(radius_box(a.center, a.radius, a.radius)),
        Entity::LwPolyline(p) => BoundingBox2D::from_points(&p.points),
        Entity::Polyline(p) => BoundingBox2D::from_points(&p.vertices),
        // Rotation ignored: axis-aligned approximation.
        Entity::Ellipse(e) => Some(radius_box(e.center, e.major_radius(), e.minor_radius())),
        Entity::Text(t) => {
            let far = t.insert
                + Vector2::new(t.text.chars().count() as f64 * t.height, t.height);
            BoundingBox2D::from_points(&[t.insert, far])
        }
        Entity::Spline(s) => spline_bounds(s, log),
    }
}

/// Compute the combined bounding box of an entity set.
///
/// Entities with no extent contribute nothing; `None` when nothing
/// contributes at all.
pub fn combined_bounds<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
) -> Option<BoundingBox2D> {
    entities
        .into_iter()
        .filter_map(entity_bounds)
        .reduce(|acc, bbox| acc.merge(&bbox))
}

fn radius_box(center: Vector2, rx: f64, ry: f64) -> BoundingBox2D {
    BoundingBox2D::new(
        Vector2::new(center.x - rx, center.y - ry),
        Vector2::new(center.x + rx, center.y + ry),
    )
}

/// Spline extents: the union of sampled curve points, control points and
/// fit points. When sampling fails the control points alone carry the
/// box; when those are missing too the spline has no extent.
fn spline_bounds(
    spline: &Spline,
    log: Option<(Handle, &mut WarningLog)>,
) -> Option<BoundingBox2D> {
    let mut points: Vec<Vector2> = Vec::new();

    match sample_spline(spline, SPLINE_BOUNDS_SAMPLES) {
        Ok(sampled) => points.extend(sampled),
        Err(reason) => {
            if let Some((handle, warnings)) = log {
                warnings.warn(
                    WarningKind::Geometry,
                    Some(handle),
                    format!("spline evaluation failed ({reason}), using control points"),
                );
            }
        }
    }

    points.extend_from_slice(&spline.control_points);
    points.extend_from_slice(&spline.fit_points);

    BoundingBox2D::from_points(&points)
}

/// Evaluate `samples` evenly-parameterized points along a B-spline via
/// de Boor's algorithm.
///
/// Fails (rather than panicking) on an inconsistent knot vector or a
/// degenerate parameter domain; callers fall back to the raw point sets.
pub fn sample_spline(spline: &Spline, samples: usize) -> std::result::Result<Vec<Vector2>, String> {
    if !spline.has_valid_knots() {
        return Err("knot vector does not match degree and control points".to_string());
    }
    if samples < 2 {
        return Err("need at least two samples".to_string());
    }

    let degree = spline.degree as usize;
    let count = spline.control_points.len();
    let lo = spline.knots[degree];
    let hi = spline.knots[count];
    if !(hi > lo) {
        return Err("degenerate knot domain".to_string());
    }
    if spline.knots.windows(2).any(|w| w[1] < w[0]) {
        return Err("knot vector is not non-decreasing".to_string());
    }

    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let u = lo + (hi - lo) * i as f64 / (samples - 1) as f64;
        points.push(de_boor(spline, degree, count, u));
    }
    Ok(points)
}

fn de_boor(spline: &Spline, degree: usize, count: usize, u: f64) -> Vector2 {
    // Knot span: largest k in [degree, count-1] with knots[k] <= u.
    let mut k = degree;
    while k < count - 1 && u >= spline.knots[k + 1] {
        k += 1;
    }

    let mut d: Vec<Vector2> = (0..=degree)
        .map(|j| spline.control_points[j + k - degree])
        .collect();

    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let i = j + k - degree;
            let denom = spline.knots[i + degree - r + 1] - spline.knots[i];
            let alpha = if denom.abs() > f64::EPSILON {
                (u - spline.knots[i]) / denom
            } else {
                0.0
            };
            d[j] = d[j - 1] * (1.0 - alpha) + d[j] * alpha;
        }
    }

    d[degree]
}
