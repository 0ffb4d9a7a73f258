use super::*;
use serde_json::json;

#[test]
fn parses_hex_case_insensitive_with_optional_hash() {
    assert_eq!(Rgb::parse_hex("#FF8000"), Some(Rgb::new(255, 128, 0)));
    assert_eq!(Rgb::parse_hex("ff8000"), Some(Rgb::new(255, 128, 0)));
    assert_eq!(Rgb::parse_hex("#aBcDeF"), Some(Rgb::new(0xab, 0xcd, 0xef)));
}

#[test]
fn malformed_hex_normalizes_to_gray() {
    for bad in ["", "#fff", "#ff00001", "#gg0000", "#+f0000", "red", " #ff0000", "#ff0000\n"] {
        assert_eq!(Rgb::from_hex_or_gray(bad), Rgb::NEUTRAL_GRAY, "input {bad:?}");
    }
}

#[test]
fn channels_require_exactly_three_valid_values() {
    assert_eq!(Rgb::from_channels(&[1, 2, 3]), Rgb::new(1, 2, 3));
    assert_eq!(Rgb::from_channels(&[1, 2]), Rgb::NEUTRAL_GRAY);
    assert_eq!(Rgb::from_channels(&[1, 2, 3, 4]), Rgb::NEUTRAL_GRAY);
    assert_eq!(Rgb::from_channels(&[256, 0, 0]), Rgb::NEUTRAL_GRAY);
    assert_eq!(Rgb::from_channels(&[-1, 0, 0]), Rgb::NEUTRAL_GRAY);
}

#[test]
fn deserializes_any_json_value_without_failing() {
    let c: Rgb = serde_json::from_value(json!("#00ff00")).unwrap();
    assert_eq!(c, Rgb::new(0, 255, 0));
    let c: Rgb = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c, Rgb::new(10, 20, 30));
    let c: Rgb = serde_json::from_value(json!({"r": 1})).unwrap();
    assert_eq!(c, Rgb::NEUTRAL_GRAY);
    let c: Rgb = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(c, Rgb::NEUTRAL_GRAY);
}

#[test]
fn serializes_as_lowercase_hex() {
    assert_eq!(
        serde_json::to_value(Rgb::new(0xAB, 0x01, 0xFF)).unwrap(),
        json!("#ab01ff")
    );
}

#[test]
fn luma_uses_broadcast_weights() {
    assert!((Rgb::WHITE.luma() - 255.0).abs() < 1e-9);
    assert!((Rgb::RED.luma() - 0.299 * 255.0).abs() < 1e-9);
}

#[test]
fn complementary_of_red_is_cyan() {
    let c = Rgb::RED.complementary();
    assert_eq!(c.r, 0);
    assert!(c.g >= 254);
    assert!(c.b >= 254);
}

#[test]
fn complementary_of_gray_is_unchanged() {
    let c = Rgb::new(100, 100, 100).complementary();
    assert!((i32::from(c.r) - 100).abs() <= 1);
    assert_eq!(c.r, c.g);
    assert_eq!(c.g, c.b);
}

#[test]
fn under_blends_by_alpha() {
    assert_eq!(Rgb::BLACK.under(Rgb::WHITE, 0), Rgb::BLACK);
    assert_eq!(Rgb::BLACK.under(Rgb::WHITE, 255), Rgb::WHITE);
    let half = Rgb::BLACK.under(Rgb::WHITE, 128);
    assert!((127..=129).contains(&half.r));
}

#[test]
fn presets_have_fixed_dimensions_and_names() {
    assert_eq!(SizePreset::Square.size(), CanvasSize::new(1080, 1080));
    assert_eq!(SizePreset::Portrait.size(), CanvasSize::new(1080, 1350));
    assert_eq!(SizePreset::Landscape.size(), CanvasSize::new(1920, 1080));
    let names: Vec<_> = SizePreset::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["square", "portrait", "landscape"]);
    assert_eq!("Portrait".parse::<SizePreset>().unwrap(), SizePreset::Portrait);
    assert!("banner".parse::<SizePreset>().is_err());
}
