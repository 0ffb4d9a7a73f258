use super::*;

#[test]
fn aspect_ratio_picks_layout_family() {
    assert_eq!(suggest_layout(1.5, &[]).recommended_layouts, ["Hero Right Layout"]);
    assert_eq!(suggest_layout(0.5, &[]).recommended_layouts, ["Vertical Layout"]);
    assert_eq!(suggest_layout(1.0, &[]).recommended_layouts, ["Centered Layout"]);
    assert_eq!(suggest_layout(1.3, &[]).recommended_layouts, ["Centered Layout"]);
    assert_eq!(suggest_layout(0.8, &[]).recommended_layouts, ["Centered Layout"]);
}

#[test]
fn first_color_drives_text_advice() {
    let dark = suggest_layout(1.0, &[Rgb::new(10, 10, 10), Rgb::WHITE]);
    assert_eq!(dark.color_guidelines, ["Use light text"]);
    let light = suggest_layout(1.0, &[Rgb::WHITE]);
    assert_eq!(light.color_guidelines, ["Use dark text"]);
    assert!(suggest_layout(1.0, &[]).color_guidelines.is_empty());
}

#[test]
fn fixed_guidelines_are_always_present() {
    let s = suggest_layout(1.0, &[]);
    assert_eq!(s.text_guidelines, ["Keep headline under 14 words"]);
    assert_eq!(s.alignment_guidelines, ["Use rule of thirds"]);
    assert!(s.warnings.is_empty());
}

#[test]
fn zero_height_counts_as_square() {
    assert_eq!(aspect_ratio(100, 0), 1.0);
    assert_eq!(aspect_ratio(200, 100), 2.0);
}
