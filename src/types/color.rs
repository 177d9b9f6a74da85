//! CAD color model: ACI indices, sentinels, and the fixed display palette
//!
//! Entities and layers carry color in two forms: an AutoCAD Color Index
//! (with the `0` ByBlock / `256` ByLayer sentinels) and an optional true
//! RGB override. This module owns the index side and the index-to-RGB
//! palette; the inheritance rules that combine entity and layer colors
//! live in [`crate::resolver`].

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A resolved display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Pure black, the resolver's universal fallback
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white; substituted with black on the canvas pen path
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Scale every channel by `factor`, clamped to the valid range
    pub fn scaled(&self, factor: f64) -> Rgb {
        let scale = |c: u8| ((c as f64 * factor).round().clamp(0.0, 255.0)) as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An AutoCAD Color Index value as stored on an entity or layer
///
/// The legacy encoding packs two sentinels into the index range:
/// `0` means "inherit from the containing block" and `256` means
/// "inherit from the layer". Everything in between is a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// Create a color from a raw AutoCAD Color Index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index((-index).min(255) as u8), // Negative means layer is off
            _ => Color::Index(7), // Default to white
        }
    }

    /// Get the raw color index
    pub fn index(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
        }
    }

    /// True for both sentinels; this viewer treats ByBlock like ByLayer
    pub fn inherits_from_layer(&self) -> bool {
        matches!(self, Color::ByLayer | Color::ByBlock)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}

/// Convert an HSV triple (hue in degrees, s/v in 0..=1) to RGB
fn hsv_to_rgb(hue: f64, sat: f64, val: f64) -> Rgb {
    let c = val * sat;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = val - c;

    let (r, g, b) = match hue as u32 {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// The fixed ACI palette.
///
/// Covers the classic indices 0-9, the tinted bands 10-65 (a new base hue
/// every five indices, brightness stepping down within each band), the
/// gray ramp 250-255, and the two sentinels, which map to black when they
/// reach the palette without having been resolved through a layer.
static ACI_TABLE: Lazy<HashMap<i16, Rgb>> = Lazy::new(|| {
    let mut table = HashMap::new();

    // Classic palette
    table.insert(0, Rgb::BLACK); // ByBlock sentinel
    table.insert(1, Rgb::new(255, 0, 0)); // Red
    table.insert(2, Rgb::new(255, 255, 0)); // Yellow
    table.insert(3, Rgb::new(0, 255, 0)); // Green
    table.insert(4, Rgb::new(0, 255, 255)); // Cyan
    table.insert(5, Rgb::new(0, 0, 255)); // Blue
    table.insert(6, Rgb::new(255, 0, 255)); // Magenta
    table.insert(7, Rgb::WHITE);
    table.insert(8, Rgb::new(128, 128, 128)); // Dark gray
    table.insert(9, Rgb::new(192, 192, 192)); // Light gray

    // Tinted bands: hue advances 30 degrees every five indices,
    // brightness drops within the band.
    for index in 10..=65i16 {
        let band = (index - 10) / 5;
        let step = (index - 10) % 5;
        let hue = (band as f64 * 30.0) % 360.0;
        let val = 1.0 - 0.15 * step as f64;
        table.insert(index, hsv_to_rgb(hue, 1.0, val));
    }

    // Gray ramp
    table.insert(250, Rgb::new(51, 51, 51));
    table.insert(251, Rgb::new(91, 91, 91));
    table.insert(252, Rgb::new(132, 132, 132));
    table.insert(253, Rgb::new(173, 173, 173));
    table.insert(254, Rgb::new(214, 214, 214));
    table.insert(255, Rgb::WHITE);
    table.insert(256, Rgb::BLACK); // ByLayer sentinel

    table
});

/// Map an AutoCAD Color Index to its display RGB.
///
/// Listed indices come straight from the palette. Unlisted indices inside
/// 0-255 fall back to the banded-darkening rule: the color of the band
/// base index `((i - 1) / 10) * 10 + 1`, darkened by 10% per step into
/// the band. Indices outside 0-255 (and unlisted bases, which resolve to
/// black) yield black. Total over all inputs, never panics.
pub fn aci_to_rgb(index: i16) -> Rgb {
    if let Some(rgb) = ACI_TABLE.get(&index) {
        return *rgb;
    }

    if (0..=255).contains(&index) {
        let base = ((index - 1) / 10) * 10 + 1;
        let base_rgb = ACI_TABLE.get(&base).copied().unwrap_or(Rgb::BLACK);
        let factor = 1.0 - 0.1 * ((index - base) % 10) as f64;
        return base_rgb.scaled(factor);
    }

    Rgb::BLACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(1), Color::Index(1));
        assert_eq!(Color::from_index(-3), Color::Index(3));
        assert_eq!(Color::from_index(300), Color::Index(7));
    }

    #[test]
    fn test_color_sentinels_inherit() {
        assert!(Color::ByLayer.inherits_from_layer());
        assert!(Color::ByBlock.inherits_from_layer());
        assert!(!Color::Index(4).inherits_from_layer());
    }

    #[test]
    fn test_classic_palette() {
        assert_eq!(aci_to_rgb(1), Rgb::new(255, 0, 0));
        assert_eq!(aci_to_rgb(5), Rgb::new(0, 0, 255));
        assert_eq!(aci_to_rgb(7), Rgb::WHITE);
        assert_eq!(aci_to_rgb(9), Rgb::new(192, 192, 192));
    }

    #[test]
    fn test_gray_ramp() {
        assert_eq!(aci_to_rgb(250), Rgb::new(51, 51, 51));
        assert_eq!(aci_to_rgb(255), Rgb::WHITE);
    }

    #[test]
    fn test_band_brightness_decreases() {
        // Indices 10..14 share a hue; each step is no brighter than the last.
        let luma = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
        let mut previous = luma(aci_to_rgb(10));
        for index in 11..=14 {
            let current = luma(aci_to_rgb(index));
            assert!(current <= previous, "index {} brighter than {}", index, index - 1);
            previous = current;
        }
    }

    #[test]
    fn test_banded_fallback_formula() {
        // 66 is the first unlisted index; its band base is 61.
        let base = aci_to_rgb(61);
        let expected = base.scaled(1.0 - 0.1 * ((66 - 61) % 10) as f64);
        assert_eq!(aci_to_rgb(66), expected);

        // A band whose base is itself unlisted resolves to black.
        assert_eq!(aci_to_rgb(100), Rgb::BLACK);
    }

    #[test]
    fn test_out_of_range_is_black() {
        assert_eq!(aci_to_rgb(-1), Rgb::BLACK);
        assert_eq!(aci_to_rgb(257), Rgb::BLACK);
        assert_eq!(aci_to_rgb(i16::MAX), Rgb::BLACK);
    }

    #[test]
    fn test_total_over_byte_range() {
        for index in 0..=255i16 {
            let _ = aci_to_rgb(index);
        }
    }

    #[test]
    fn test_rgb_scaled_clamps() {
        assert_eq!(Rgb::new(200, 100, 0).scaled(0.5), Rgb::new(100, 50, 0));
        assert_eq!(Rgb::new(200, 100, 0).scaled(2.0), Rgb::new(255, 200, 0));
    }
}
