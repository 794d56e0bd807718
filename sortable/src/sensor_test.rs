#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_sensor_uses_eight_pixels() {
    assert_eq!(PointerSensor::default().activation_distance, 8.0);
}

#[test]
fn with_distance_clamps_negative_to_zero() {
    assert_eq!(PointerSensor::with_distance(-3.0).activation_distance, 0.0);
}

#[test]
fn below_threshold_is_not_activated() {
    let sensor = PointerSensor::default();
    assert!(!sensor.is_activated(Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
}

#[test]
fn at_threshold_is_activated() {
    let sensor = PointerSensor::default();
    assert!(sensor.is_activated(Point::new(0.0, 0.0), Point::new(8.0, 0.0)));
}

#[test]
fn diagonal_travel_counts_euclidean_distance() {
    let sensor = PointerSensor::with_distance(5.0);
    assert!(sensor.is_activated(Point::new(10.0, 10.0), Point::new(13.0, 14.0)));
}

#[test]
fn zero_distance_activates_on_any_movement() {
    let sensor = PointerSensor::with_distance(0.0);
    let origin = Point::new(1.0, 1.0);
    assert!(!sensor.is_activated(origin, origin));
    assert!(sensor.is_activated(origin, Point::new(1.5, 1.0)));
}
