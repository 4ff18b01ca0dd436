use std::f64::consts::PI;

use crate::core::{Point, Sector};

/// Point at `radius` from `origin` along `angle` (radians, east-origin, y down).
#[must_use]
pub fn rotated(origin: Point, angle: f64, radius: f64) -> Point {
    origin + Point::new(angle.cos(), angle.sin()) * radius
}

/// SVG large-arc flag for a span given in configured degrees.
#[must_use]
pub fn large_arc_flag(start_deg: f64, stop_deg: f64) -> bool {
    stop_deg - start_deg >= 180.0
}

/// Wraps `angle` into `(-PI, PI]`.
#[must_use]
pub fn normalize_angle(mut angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    while angle > PI {
        angle -= 2.0 * PI;
    }
    angle
}

/// Returns `true` when `point` lies inside `sector` (angularly and radially).
///
/// The start boundary is open and the stop boundary closed, so two adjacent
/// slices never both claim a shared edge. `tolerance` widens the outer radius
/// only. The hole of a ring is not excluded.
#[must_use]
pub fn contains_point(sector: &Sector, point: Point, tolerance: f64) -> bool {
    let center = sector.center;
    let mut angle = (point.y - center.y).atan2(point.x - center.x);
    let start = normalize_angle(sector.canonical_start());
    let mut stop = normalize_angle(sector.canonical_stop());
    if stop <= start {
        stop += 2.0 * PI;
    }
    if angle <= start {
        angle += 2.0 * PI;
    }

    start < angle && angle <= stop && point.distance_to(center) <= sector.radius + tolerance
}

/// Hit-test entry point for hosts; same contract as [`contains_point`].
#[must_use]
pub fn hit_test(sector: &Sector, point: Point, tolerance: f64) -> bool {
    contains_point(sector, point, tolerance)
}
