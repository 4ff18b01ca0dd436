use semicircle_rs::core::{AngleRange, DEFAULT_STOP_ANGLE, direction, to_radians};
use std::f64::consts::PI;

#[test]
fn north_is_minus_half_pi_and_east_is_zero() {
    assert_eq!(to_radians(0.0), -PI / 2.0);
    assert_eq!(to_radians(90.0), 0.0);
    assert_eq!(to_radians(180.0), PI / 2.0);
}

#[test]
fn backwards_ranges_are_read_swapped() {
    let forward = AngleRange::new(45.0, 90.0);
    let backward = AngleRange::new(90.0, 45.0);

    assert_eq!(backward.canonical_start(), forward.canonical_start());
    assert_eq!(backward.canonical_stop(), forward.canonical_stop());
    assert_eq!(backward.span_degrees(), 45.0);
}

#[test]
fn default_range_is_a_full_circle_but_not_a_sector() {
    let range = AngleRange::default();
    assert_eq!(range.start_angle, 0.0);
    assert_eq!(range.stop_angle, DEFAULT_STOP_ANGLE);
    assert!(range.is_full_circle());
    assert!(!range.is_sector());
}

#[test]
fn full_circle_requires_zero_start() {
    assert!(AngleRange::new(0.0, 360.0).is_full_circle());
    assert!(!AngleRange::new(1.0, 361.0).is_full_circle());
    assert!(AngleRange::new(1.0, 361.0).is_sector());
    assert!(!AngleRange::new(0.0, 359.0).is_full_circle());
}

#[test]
fn zero_span_is_not_a_sector() {
    let range = AngleRange::new(120.0, 120.0);
    assert!(range.is_zero_span());
    assert!(!range.is_sector());
}

#[test]
fn direction_centers_the_span() {
    let range = AngleRange::with_direction(90.0, None);
    assert_eq!(range.start_angle, 85.0);
    assert_eq!(range.stop_angle, 95.0);
    assert_eq!(range.direction_degrees(), 90.0);

    let wide = AngleRange::with_direction(180.0, Some(60.0));
    assert_eq!((wide.start_angle, wide.stop_angle), (150.0, 210.0));
    assert_eq!(direction(0.0, 90.0), 45.0);
}

#[test]
fn setters_replace_one_bound() {
    let mut range = AngleRange::new(10.0, 20.0);
    range.set_start_angle(200.0);
    assert_eq!(range.canonical_degrees(), (20.0, 200.0));
    range.set_stop_angle(300.0);
    assert_eq!(range.canonical_degrees(), (200.0, 300.0));
}

#[test]
fn missing_stop_angle_defaults_when_deserialized() {
    let range: AngleRange = serde_json::from_str(r#"{"start_angle": 30.0}"#).expect("parse range");
    assert_eq!(range.start_angle, 30.0);
    assert_eq!(range.stop_angle, DEFAULT_STOP_ANGLE);
}
