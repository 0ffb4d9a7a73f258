use super::*;

#[test]
fn builtin_face_reports_its_source() {
    let face = Typeface::builtin();
    assert!(face.is_builtin());
    assert_eq!(face.source(), &FontSource::Builtin);
    assert!(face.font_bytes().is_none());
    assert_eq!(face.family(), "builtin 5x7");
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let err = Typeface::from_bytes(vec![0u8; 64], 0, FontSource::Builtin).unwrap_err();
    assert!(matches!(err, AdforgeError::Validation(_)));
}

#[test]
fn unreadable_font_file_is_an_asset_error() {
    let err = Typeface::from_file(Path::new("no/such/font.ttf")).unwrap_err();
    assert!(matches!(err, AdforgeError::Asset(_)));
}

#[test]
fn resolve_without_sources_uses_builtin() {
    assert!(Typeface::resolve(None, false).is_builtin());
    let missing = Path::new("no/such/font.ttf");
    assert!(Typeface::resolve(Some(missing), false).is_builtin());
}

#[test]
fn bitmap_shaping_grows_with_size() {
    let mut engine = TextEngine::new(&Typeface::builtin());
    let small = engine.shape("Sale!", 16.0).unwrap();
    let large = engine.shape("Sale!", 64.0).unwrap();
    assert!(large.width() > small.width());
    assert!(large.height() > small.height());
    assert_eq!(small.size_px(), 16.0);
}

#[test]
fn empty_text_has_zero_width() {
    let mut engine = TextEngine::new(&Typeface::builtin());
    assert_eq!(engine.shape("", 40.0).unwrap().width(), 0.0);
}

#[test]
fn invalid_sizes_are_rejected() {
    let mut engine = TextEngine::new(&Typeface::builtin());
    assert!(engine.shape("x", 0.0).is_err());
    assert!(engine.shape("x", f32::NAN).is_err());
}

const FIXTURE_FONT: &str = "tests/data/fonts/Tuffy.ttf";

fn fixture_db() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_data(std::fs::read(FIXTURE_FONT).unwrap());
    db
}

#[test]
fn font_file_reports_family_and_source() {
    let face = Typeface::from_file(Path::new(FIXTURE_FONT)).unwrap();
    assert!(!face.is_builtin());
    assert_eq!(face.family(), "Tuffy");
    assert_eq!(
        face.source(),
        &FontSource::File {
            path: PathBuf::from(FIXTURE_FONT)
        }
    );
    assert!(face.font_bytes().is_some_and(|b| !b.is_empty()));
}

#[test]
fn resolve_prefers_configured_file() {
    let face = Typeface::resolve(Some(Path::new(FIXTURE_FONT)), false);
    assert_eq!(face.family(), "Tuffy");
}

#[test]
fn outline_shaping_uses_glyph_metrics() {
    let face = Typeface::from_file(Path::new(FIXTURE_FONT)).unwrap();
    let mut engine = TextEngine::new(&face);
    let small = engine.shape("Hello", 20.0).unwrap();
    let large = engine.shape("Hello", 60.0).unwrap();
    assert!(matches!(small.glyphs, ShapedGlyphs::Outline { .. }));
    assert!(small.width() > 0.0 && small.height() > 0.0);
    assert!(large.width() > 2.5 * small.width());
    assert!(large.height() > small.height());
    // Proportional face: "i" is narrower than "W".
    let narrow = engine.shape("iiii", 40.0).unwrap();
    let wide = engine.shape("WWWW", 40.0).unwrap();
    assert!(narrow.width() < wide.width());
}

#[test]
fn generic_sans_serif_alone_misses_installed_faces() {
    // fontdb maps the generic family to "Arial" by default.
    assert!(Typeface::sans_serif_from_db(&fixture_db(), &[]).is_none());
}

#[test]
fn named_sans_serif_candidates_are_tried_in_order() {
    let face = Typeface::sans_serif_from_db(&fixture_db(), &["Missing Sans", "Tuffy"]).unwrap();
    assert_eq!(
        face.source(),
        &FontSource::System {
            family: "Tuffy".to_string()
        }
    );
    let mut engine = TextEngine::new(&face);
    assert!(engine.shape("Sale!", 32.0).unwrap().width() > 0.0);
}

#[test]
fn common_linux_families_are_candidates() {
    for family in ["DejaVu Sans", "Liberation Sans", "Noto Sans"] {
        assert!(SANS_SERIF_FAMILIES.contains(&family), "{family}");
    }
}

#[test]
fn installed_dejavu_is_found_by_system_lookup() {
    if !Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf").exists() {
        return;
    }
    let face = Typeface::system_sans_serif().unwrap();
    assert!(matches!(face.source(), FontSource::System { .. }));
    assert!(!face.is_builtin());
}
