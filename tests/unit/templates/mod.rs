use super::*;

#[test]
fn tags_and_order_are_fixed() {
    let tags: Vec<_> = Template::ALL.iter().map(|t| t.tag()).collect();
    assert_eq!(tags, ["clean", "split", "hero", "gradient", "neon", "diagonal"]);
}

#[test]
fn file_names_combine_preset_and_tag() {
    assert_eq!(
        Template::NeonBadge.file_name(SizePreset::Landscape),
        "landscape_neon.png"
    );
}

#[test]
fn parses_and_serializes_by_tag() {
    assert_eq!("Hero".parse::<Template>().unwrap(), Template::HeroBadge);
    assert!("poster".parse::<Template>().is_err());
    assert_eq!(
        serde_json::to_value(Template::DiagonalSplit).unwrap(),
        serde_json::json!("diagonal")
    );
}

#[test]
fn recipes_keep_cutouts_inside_the_canvas_fractions() {
    for t in Template::ALL {
        let r = t.recipe();
        assert!(r.cutout.max_width > 0.0 && r.cutout.max_width < 1.0, "{t}");
        assert!(r.cutout.max_height > 0.0 && r.cutout.max_height < 1.0, "{t}");
    }
}

#[test]
fn render_writes_a_png_for_a_cutout_file() {
    let dir = tempfile::tempdir().unwrap();
    let cutout_path = dir.path().join("cutout.png");
    image::RgbaImage::from_pixel(40, 30, image::Rgba([0, 120, 255, 255]))
        .save(&cutout_path)
        .unwrap();
    let out = dir.path().join("hero.png");

    let report = Template::HeroBadge
        .render(
            &cutout_path,
            &out,
            "Sale!",
            "50% OFF",
            Rgb::RED,
            CanvasSize::new(540, 540),
        )
        .unwrap();

    assert_eq!(report.template, Template::HeroBadge);
    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (540, 540));
}

#[test]
fn render_fails_for_missing_cutout() {
    let dir = tempfile::tempdir().unwrap();
    let err = Template::CleanMinimal
        .render(
            &dir.path().join("missing.png"),
            &dir.path().join("out.png"),
            "a",
            "b",
            Rgb::RED,
            CanvasSize::new(100, 100),
        )
        .unwrap_err();
    assert!(matches!(err, AdforgeError::Asset(_)));
}
