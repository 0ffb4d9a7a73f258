use super::*;

#[test]
fn defaults_are_parallel_with_system_fonts() {
    let opts = ComposerOpts::default();
    assert!(opts.parallel);
    assert!(opts.system_fonts);
    assert_eq!(opts.threads, None);
    assert_eq!(opts.sizing, FontSizing::default());
    opts.validate().unwrap();
}

#[test]
fn zero_threads_is_a_validation_error() {
    let opts = ComposerOpts::default().with_threads(Some(0));
    assert!(matches!(opts.validate(), Err(AdforgeError::Validation(_))));
    assert!(matches!(build_thread_pool(Some(0)), Err(AdforgeError::Validation(_))));
}

#[test]
fn pool_honors_thread_count() {
    let pool = build_thread_pool(Some(2)).unwrap();
    assert_eq!(pool.current_num_threads(), 2);
}

#[test]
fn builders_chain() {
    let opts = ComposerOpts::default()
        .with_out_dir("out")
        .with_font_path(Some("font.ttf".into()))
        .with_system_fonts(false)
        .with_parallel(false)
        .with_threads(Some(3));
    assert_eq!(opts.out_dir, PathBuf::from("out"));
    assert_eq!(opts.font_path, Some(PathBuf::from("font.ttf")));
    assert!(!opts.system_fonts && !opts.parallel);
    assert_eq!(opts.threads, Some(3));
}

#[test]
fn partial_json_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opts.json");
    std::fs::write(&path, r#"{"out_dir": "x", "sizing": {"min": 20}}"#).unwrap();
    let opts = ComposerOpts::from_json_file(&path).unwrap();
    assert_eq!(opts.out_dir, PathBuf::from("x"));
    assert_eq!(opts.sizing.min, 20);
    assert_eq!(opts.sizing.start, 80);
    assert!(opts.parallel);
}

#[test]
fn malformed_config_is_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opts.json");
    std::fs::write(&path, "{ nope").unwrap();
    assert!(matches!(
        ComposerOpts::from_json_file(&path),
        Err(AdforgeError::Serde(_))
    ));
    assert!(matches!(
        ComposerOpts::from_json_file(&dir.path().join("missing.json")),
        Err(AdforgeError::Asset(_))
    ));
}
