//! Display color resolution
//!
//! Turns the color data carried on an entity (ACI index plus optional
//! true-color override) into a displayable RGB value, following the
//! legacy inheritance rules: an explicit entity RGB always wins, the
//! ByLayer/ByBlock sentinels defer to the layer, and plain indices go
//! through the ACI palette.
//!
//! There are two call sites with one deliberate difference. The canvas
//! *pen* path substitutes black for pure white, because drawings authored
//! against a dark background read inverted on the viewer's light canvas.
//! The layer-list *swatch* path keeps true white so the listing shows the
//! authored color.

use crate::entities::EntityCommon;
use crate::notification::{WarningKind, WarningLog};
use crate::tables::{Layer, LayerTable};
use crate::types::{aci_to_rgb, Handle, Rgb};

/// Substitute black for pure white; identity for everything else
fn white_to_black(rgb: Rgb) -> Rgb {
    if rgb == Rgb::WHITE {
        Rgb::BLACK
    } else {
        rgb
    }
}

/// Resolve a layer's own color (no inheritance involved)
fn layer_rgb(layer: &Layer) -> Rgb {
    match layer.true_color {
        Some(rgb) => rgb,
        None => aci_to_rgb(layer.color.index()),
    }
}

/// Resolve the drawing pen color for an entity on the canvas.
///
/// Applies the white-to-black substitution. A missing layer on an
/// inherited color resolves to black and records a
/// [`WarningKind::ColorResolution`] entry; the function itself never
/// fails.
pub fn resolve_pen(
    common: &EntityCommon,
    layers: &LayerTable,
    entity: Option<Handle>,
    warnings: &mut WarningLog,
) -> Rgb {
    if let Some(rgb) = common.true_color {
        return white_to_black(rgb);
    }

    if common.color.inherits_from_layer() {
        return match layers.get(&common.layer) {
            Some(layer) => white_to_black(layer_rgb(layer)),
            None => {
                warnings.warn(
                    WarningKind::ColorResolution,
                    entity,
                    format!("layer {:?} not found, using black", common.layer),
                );
                Rgb::BLACK
            }
        };
    }

    white_to_black(aci_to_rgb(common.color.index()))
}

/// Resolve a layer's swatch color for the layer listing.
///
/// Shares the ACI palette with the pen path but keeps true white.
pub fn resolve_swatch(layer: &Layer) -> Rgb {
    layer_rgb(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn layers_with(layer: Layer) -> LayerTable {
        LayerTable::from_layers(vec![layer])
    }

    fn common_on(layer: &str, color: Color) -> EntityCommon {
        EntityCommon {
            color,
            ..EntityCommon::with_layer(layer)
        }
    }

    #[test]
    fn test_entity_true_color_wins() {
        let layers = layers_with(Layer::with_color("A", Color::Index(3)));
        let mut common = common_on("A", Color::Index(1));
        common.true_color = Some(Rgb::new(10, 20, 30));
        let mut log = WarningLog::new();
        assert_eq!(
            resolve_pen(&common, &layers, None, &mut log),
            Rgb::new(10, 20, 30)
        );
    }

    #[test]
    fn test_bylayer_uses_layer_rgb() {
        let layers = layers_with(Layer::with_true_color("Green", Rgb::new(0, 200, 0)));
        let common = common_on("Green", Color::ByLayer);
        let mut log = WarningLog::new();
        assert_eq!(
            resolve_pen(&common, &layers, None, &mut log),
            Rgb::new(0, 200, 0)
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_byblock_treated_as_bylayer() {
        let layers = layers_with(Layer::with_color("A", Color::Index(5)));
        let common = common_on("A", Color::ByBlock);
        let mut log = WarningLog::new();
        assert_eq!(
            resolve_pen(&common, &layers, None, &mut log),
            Rgb::new(0, 0, 255)
        );
    }

    #[test]
    fn test_explicit_index_ignores_layer() {
        let layers = layers_with(Layer::with_color("A", Color::Index(3)));
        let common = common_on("A", Color::Index(1));
        let mut log = WarningLog::new();
        assert_eq!(
            resolve_pen(&common, &layers, None, &mut log),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn test_missing_layer_falls_back_to_black() {
        let layers = LayerTable::new();
        let common = common_on("Ghost", Color::ByLayer);
        let mut log = WarningLog::new();
        assert_eq!(resolve_pen(&common, &layers, None, &mut log), Rgb::BLACK);
        assert_eq!(log.of_kind(WarningKind::ColorResolution).count(), 1);
    }

    #[test]
    fn test_pen_white_becomes_black() {
        // Index 7 is true white in the palette; the pen path inverts it.
        let layers = layers_with(Layer::with_color("A", Color::Index(7)));
        let common = common_on("A", Color::ByLayer);
        let mut log = WarningLog::new();
        assert_eq!(resolve_pen(&common, &layers, None, &mut log), Rgb::BLACK);

        let mut with_rgb = common_on("A", Color::Index(1));
        with_rgb.true_color = Some(Rgb::WHITE);
        assert_eq!(resolve_pen(&with_rgb, &layers, None, &mut log), Rgb::BLACK);
    }

    #[test]
    fn test_swatch_keeps_white() {
        let layer = Layer::with_color("A", Color::Index(7));
        assert_eq!(resolve_swatch(&layer), Rgb::WHITE);

        let rgb_layer = Layer::with_true_color("B", Rgb::WHITE);
        assert_eq!(resolve_swatch(&rgb_layer), Rgb::WHITE);
    }
}
