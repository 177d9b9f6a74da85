//! Color resolution across the palette, the inheritance rules and the
//! pen/swatch split

mod common;

use common::{loaded_scene, RecordingSink};
use proptest::prelude::*;
use dxf_scene_rs::resolver::{resolve_pen, resolve_swatch};
use dxf_scene_rs::{
    aci_to_rgb, Color, EntityCommon, Handle, Layer, LayerTable, Rgb, WarningKind, WarningLog,
};

fn pen(common: &EntityCommon, layers: &LayerTable) -> Rgb {
    let mut log = WarningLog::new();
    resolve_pen(common, layers, None, &mut log)
}

#[test]
fn classic_palette_entries() {
    assert_eq!(aci_to_rgb(1), Rgb::new(255, 0, 0));
    assert_eq!(aci_to_rgb(2), Rgb::new(255, 255, 0));
    assert_eq!(aci_to_rgb(3), Rgb::new(0, 255, 0));
    assert_eq!(aci_to_rgb(5), Rgb::new(0, 0, 255));
    assert_eq!(aci_to_rgb(7), Rgb::WHITE);
    assert_eq!(aci_to_rgb(0), Rgb::BLACK);
    assert_eq!(aci_to_rgb(256), Rgb::BLACK);
}

#[test]
fn gray_ramp() {
    assert_eq!(aci_to_rgb(250), Rgb::new(51, 51, 51));
    assert_eq!(aci_to_rgb(255), Rgb::new(255, 255, 255));
}

#[test]
fn banded_fallback_matches_formula() {
    // For an unlisted index i: base = ((i-1)/10)*10+1,
    // factor = 1 - 0.1*((i-base) % 10).
    for i in [66i16, 77, 123, 249] {
        let base = ((i - 1) / 10) * 10 + 1;
        let factor = 1.0 - 0.1 * ((i - base) % 10) as f64;
        assert_eq!(aci_to_rgb(i), aci_to_rgb(base).scaled(factor), "index {i}");
    }
}

#[test]
fn bylayer_resolves_to_layer_rgb() {
    let layers = LayerTable::from_layers(vec![Layer::with_true_color(
        "Green",
        Rgb::new(0, 200, 0),
    )]);
    let common = EntityCommon::with_layer("Green");
    assert_eq!(pen(&common, &layers), Rgb::new(0, 200, 0));
}

#[test]
fn explicit_rgb_wins_over_everything() {
    let layers = LayerTable::from_layers(vec![Layer::with_color("A", Color::Index(3))]);
    let mut common = EntityCommon::with_layer("A");
    common.color = Color::Index(1);
    common.true_color = Some(Rgb::new(12, 34, 56));
    assert_eq!(pen(&common, &layers), Rgb::new(12, 34, 56));
}

#[test]
fn pen_substitutes_black_for_white_swatch_does_not() {
    let layer = Layer::with_color("Bright", Color::Index(7));
    let layers = LayerTable::from_layers(vec![layer.clone()]);
    let common = EntityCommon::with_layer("Bright");

    assert_eq!(pen(&common, &layers), Rgb::BLACK);
    assert_eq!(resolve_swatch(&layer), Rgb::WHITE);
}

#[test]
fn missing_layer_warns_and_falls_back_to_black() {
    let layers = LayerTable::new();
    let common = EntityCommon::with_layer("Ghost");
    let mut log = WarningLog::new();

    let rgb = resolve_pen(&common, &layers, Some(Handle::new(4)), &mut log);
    assert_eq!(rgb, Rgb::BLACK);

    let warning = log.of_kind(WarningKind::ColorResolution).next().unwrap();
    assert_eq!(warning.entity, Some(Handle::new(4)));
}

#[test]
fn scene_renders_default_layers_black() {
    // Sample layers carry index 7: white in the palette, black on the
    // canvas.
    let (scene, _) = loaded_scene();
    let mut sink = RecordingSink::new();
    scene.render(&mut sink);
    assert!(sink.primitives.iter().all(|p| p.color == Rgb::BLACK));
}

proptest! {
    // Total over the entire i16 range, never panics, always deterministic.
    #[test]
    fn aci_to_rgb_is_total(index in i16::MIN..=i16::MAX) {
        let first = aci_to_rgb(index);
        let second = aci_to_rgb(index);
        prop_assert_eq!(first, second);
    }

    // The canvas pen path never yields pure white, whatever the index.
    #[test]
    fn pen_path_never_white(index in 1i16..=255) {
        let layers = LayerTable::new();
        let mut common = EntityCommon::new();
        common.color = Color::Index(index as u8);
        let mut log = WarningLog::new();
        prop_assert_ne!(resolve_pen(&common, &layers, None, &mut log), Rgb::WHITE);
    }
}
