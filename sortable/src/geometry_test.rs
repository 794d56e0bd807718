#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance_to(b), 5.0));
    assert!(approx_eq(b.distance_to(a), 5.0));
}

#[test]
fn point_distance_to_self_is_zero() {
    let p = Point::new(12.5, -3.0);
    assert!(approx_eq(p.distance_to(p), 0.0));
}

// --- Rect ---

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 100.0, 32.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 52.0);
}

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 32.0);
    assert_eq!(r.center(), Point::new(60.0, 36.0));
}

#[test]
fn rect_translate_keeps_size() {
    let r = Rect::new(10.0, 20.0, 100.0, 32.0).translate(-5.0, 7.5);
    assert_eq!(r, Rect::new(5.0, 27.5, 100.0, 32.0));
}
