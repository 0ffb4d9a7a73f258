use super::*;
use crate::foundation::core::CanvasSize;
use crate::render::canvas::Canvas;

fn canvas() -> Canvas {
    Canvas::new(CanvasSize::new(100, 100), Rgb::WHITE).unwrap()
}

#[test]
fn pill_fills_center_but_not_rounded_corners() {
    let mut c = canvas();
    c.draw(|ctx| pill(ctx, Rect::new(10.0, 10.0, 90.0, 50.0), 20.0, Rgb::RED))
        .unwrap();
    assert_eq!(c.pixel(50, 30), Some([255, 0, 0, 255]));
    assert_eq!(c.pixel(11, 11), Some([255, 255, 255, 255]));
}

#[test]
fn polygon_covers_its_interior_only() {
    let mut c = canvas();
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 55.0),
        Point::new(0.0, 30.0),
    ];
    c.draw(|ctx| fill_polygon(ctx, &pts, Rgb::BLACK)).unwrap();
    assert_eq!(c.pixel(50, 10), Some([0, 0, 0, 255]));
    assert_eq!(c.pixel(5, 60), Some([255, 255, 255, 255]));
    assert_eq!(c.pixel(95, 50), Some([0, 0, 0, 255]));
}

#[test]
fn degenerate_polygon_draws_nothing() {
    let mut c = canvas();
    c.draw(|ctx| fill_polygon(ctx, &[Point::new(1.0, 1.0), Point::new(90.0, 90.0)], Rgb::BLACK))
        .unwrap();
    assert!((0..100).all(|i| c.pixel(i, i) == Some([255, 255, 255, 255])));
}

#[test]
fn ring_leaves_its_middle_untouched() {
    let mut c = canvas();
    c.draw(|ctx| {
        fill_circle(ctx, Point::new(50.0, 50.0), 30.0, Rgb::new(0, 200, 0));
        stroke_circle(ctx, Point::new(50.0, 50.0), 30.0, 8.0, Rgb::BLACK);
    })
    .unwrap();
    assert_eq!(c.pixel(50, 50), Some([0, 200, 0, 255]));
    assert_eq!(c.pixel(50, 20), Some([0, 0, 0, 255]));
    assert_eq!(c.pixel(2, 2), Some([255, 255, 255, 255]));
}
