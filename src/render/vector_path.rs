//! SVG path-data synthesis for sectors, rings and circles.

use crate::core::{Point, Sector};
use crate::render::ShapeStrategy;

/// Path data emitted for sectors with nothing to draw.
pub const EMPTY_PATH: &str = "M0 0";

/// Builds SVG path data for `sector`.
///
/// Zero-span sectors produce [`EMPTY_PATH`]; plain full circles are handed to
/// [`base_circle_path`].
#[must_use]
pub fn synthesize_vector_path(sector: &Sector) -> String {
    match ShapeStrategy::select(sector) {
        ShapeStrategy::BaseCircle => base_circle_path(sector),
        ShapeStrategy::Sector => sector_path(sector),
    }
}

/// Closed circle (or ellipse) outline made of two half-turn relative arcs.
#[must_use]
pub fn base_circle_path(sector: &Sector) -> String {
    if sector.is_empty() {
        return EMPTY_PATH.to_owned();
    }
    circle_subpath(sector.center, sector.radius, sector.radius_y_or_radius(), false)
}

fn sector_path(sector: &Sector) -> String {
    if sector.is_empty() {
        return EMPTY_PATH.to_owned();
    }

    let radius = sector.radius;
    let radius_y = sector.radius_y_or_radius();
    let large_arc = u8::from(sector.large_arc());

    if sector.is_ring() && sector.is_full_sector() {
        let outer = circle_subpath(sector.center, radius, radius_y, false);
        let inner = circle_subpath(
            sector.center,
            sector.inner_radius,
            sector.inner_radius_y(),
            true,
        );
        return format!("{outer} {inner}");
    }

    if sector.angles.is_zero_span() {
        return EMPTY_PATH.to_owned();
    }

    let outer_start = pair(sector.outer_start());
    let outer_stop = pair(sector.outer_stop());

    if sector.is_ring() {
        let inner_radius = sector.inner_radius;
        let inner_radius_y = sector.inner_radius_y();
        let inner_start = pair(sector.inner_start());
        let inner_stop = pair(sector.inner_stop());
        return format!(
            "M {outer_start} A {radius},{radius_y} 0 {large_arc} 1 {outer_stop} \
             L {inner_stop} A {inner_radius},{inner_radius_y} 0 {large_arc} 0 {inner_start} Z"
        );
    }

    let center = pair(sector.center);
    format!("M {center} L {outer_start} A {radius},{radius_y} 0 {large_arc} 1 {outer_stop} Z")
}

/// `reverse` flips the sweep so an inner subpath winds against the outer one.
fn circle_subpath(center: Point, radius: f64, radius_y: f64, reverse: bool) -> String {
    let start = pair(Point::new(center.x - radius, center.y));
    let sweep = u8::from(reverse);
    let diameter = radius * 2.0;
    format!(
        "M {start} a {radius},{radius_y} 0 1 {sweep} {diameter},0 \
         a {radius},{radius_y} 0 1 {sweep} {},0 Z",
        -diameter
    )
}

fn pair(point: Point) -> String {
    format!("{},{}", point.x, point.y)
}
