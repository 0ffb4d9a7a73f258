use super::*;

#[test]
fn bright_backgrounds_get_black_text() {
    assert_eq!(pick_best_text_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(pick_best_text_color(Rgb::new(161, 161, 161)), Rgb::BLACK);
    assert_eq!(pick_best_text_color(Rgb::new(255, 255, 0)), Rgb::BLACK);
}

#[test]
fn dark_backgrounds_get_white_text() {
    assert_eq!(pick_best_text_color(Rgb::BLACK), Rgb::WHITE);
    assert_eq!(pick_best_text_color(Rgb::RED), Rgb::WHITE);
    assert_eq!(pick_best_text_color(Rgb::new(20, 20, 20)), Rgb::WHITE);
}

#[test]
fn threshold_itself_gets_white_text() {
    assert_eq!(pick_best_text_color(Rgb::new(160, 160, 160)), Rgb::WHITE);
}
