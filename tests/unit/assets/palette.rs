use super::*;

#[test]
fn fixed_palette_normalizes_and_preserves_order() {
    let palette = FixedPalette::from_hex(&["#00FF00", "nope", "0000ff"]);
    let colors = palette.palette(Path::new("ignored.png")).unwrap();
    assert_eq!(
        colors,
        vec![Rgb::new(0, 255, 0), Rgb::NEUTRAL_GRAY, Rgb::new(0, 0, 255)]
    );
}

#[test]
fn empty_palette_stays_empty() {
    let colors = FixedPalette::default().palette(Path::new("x.png")).unwrap();
    assert!(colors.is_empty());
}
