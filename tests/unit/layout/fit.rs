use super::*;
use crate::assets::fonts::Typeface;

fn engine() -> TextEngine {
    TextEngine::new(&Typeface::builtin())
}

#[test]
fn candidates_walk_down_from_start() {
    let sizes: Vec<_> = FontSizing::default().candidates().collect();
    assert_eq!(sizes.first(), Some(&80));
    assert_eq!(sizes.last(), Some(&12));
    assert_eq!(sizes.len(), 35);
}

#[test]
fn degenerate_sizing_is_normalized() {
    let s = FontSizing {
        start: 5,
        min: 0,
        step: 0,
    }
    .normalized();
    assert_eq!(
        s,
        FontSizing {
            start: 5,
            min: 1,
            step: 1
        }
    );
    let inverted = FontSizing {
        start: 10,
        min: 20,
        step: 2,
    };
    assert_eq!(inverted.candidates().collect::<Vec<_>>(), vec![20]);
}

#[test]
fn roomy_box_keeps_start_size() {
    let fitted = auto_font_size(&mut engine(), "Hi", 10_000.0, 10_000.0, FontSizing::default())
        .unwrap();
    assert_eq!(fitted.size, 80);
    assert!(!fitted.overflowed);
}

#[test]
fn tight_box_shrinks_text_until_it_fits() {
    let fitted =
        auto_font_size(&mut engine(), "Summer Sale", 400.0, 200.0, FontSizing::default()).unwrap();
    assert!(fitted.size < 80 && fitted.size >= 12);
    assert!(!fitted.overflowed);
    assert!(fitted.shaped.width() <= 400.0);
}

#[test]
fn impossible_box_overflows_at_min() {
    let long = "word ".repeat(200);
    let fitted = auto_font_size(&mut engine(), &long, 300.0, 100.0, FontSizing::default()).unwrap();
    assert_eq!(fitted.size, 12);
    assert!(fitted.overflowed);
}

#[test]
fn size_stays_within_range_for_many_boxes() {
    let mut e = engine();
    for w in [10.0, 80.0, 300.0, 900.0] {
        for h in [5.0, 40.0, 200.0] {
            let f = auto_font_size(&mut e, "50% OFF", w, h, FontSizing::default()).unwrap();
            assert!((12..=80).contains(&f.size));
            assert_eq!(f.overflowed, f.shaped.width() > w || f.shaped.height() > h);
        }
    }
}

#[test]
fn outline_metrics_drive_the_fit() {
    let face = Typeface::from_file(std::path::Path::new("tests/data/fonts/Tuffy.ttf")).unwrap();
    let mut e = TextEngine::new(&face);
    let roomy = auto_font_size(&mut e, "Summer Sale", 10_000.0, 10_000.0, FontSizing::default())
        .unwrap();
    assert_eq!(roomy.size, 80);

    // Half the width at 80px must force a smaller size that then fits.
    let max_w = roomy.shaped.width() / 2.0;
    let tight = auto_font_size(&mut e, "Summer Sale", max_w, 10_000.0, FontSizing::default())
        .unwrap();
    assert!(!tight.overflowed);
    assert!(tight.size < 80 && tight.size >= 12);
    assert!(tight.shaped.width() <= max_w);
    let next = e.shape("Summer Sale", (tight.size + 2) as f32).unwrap();
    assert!(next.width() > max_w, "size {} was not the largest fit", tight.size);
}
