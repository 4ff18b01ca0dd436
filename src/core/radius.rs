use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::angle::DEG_TO_RAD;
use crate::core::projection::{Projection, Surface};
use crate::core::{LatLng, Point};

/// Mean earth radius used to turn meters into a latitude delta.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Local recovery applied when the geodesic correction degenerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionFallback {
    /// Longitude delta was NaN or zero; used `latR / cos(lat)` instead.
    FlatEarth,
    /// Pixel radius was still NaN; treated as no radius.
    Collapsed,
}

/// Pixel radius resolved from a linear radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRadius {
    pub pixels: f64,
    pub fallback: Option<ProjectionFallback>,
}

impl ProjectedRadius {
    const NONE: Self = Self {
        pixels: 0.0,
        fallback: None,
    };
}

/// Projected center and pixel radii of a geographic circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCircle {
    pub point: Point,
    pub radius: f64,
    pub radius_y: Option<f64>,
    pub fallback: Option<ProjectionFallback>,
}

#[derive(Debug, Clone, Copy)]
struct GeodesicFrame {
    point: Point,
    top: Point,
    lat2: f64,
    lng_r: f64,
    fallback: Option<ProjectionFallback>,
}

fn geodesic_frame(projection: &dyn Projection, center: LatLng, meters: f64) -> GeodesicFrame {
    let d = DEG_TO_RAD;
    let (lat, lng) = (center.lat, center.lng);
    let lat_r = (meters / EARTH_RADIUS_METERS) / d;
    let top = projection.project(LatLng::new(lat + lat_r, lng));
    let bottom = projection.project(LatLng::new(lat - lat_r, lng));
    let point = (top + bottom) / 2.0;
    let lat2 = projection.unproject(point).lat;

    let mut lng_r = (((lat_r * d).cos() - (lat * d).sin() * (lat2 * d).sin())
        / ((lat * d).cos() * (lat2 * d).cos()))
    .acos()
        / d;
    let mut fallback = None;
    if lng_r.is_nan() || lng_r == 0.0 {
        lng_r = lat_r / (lat * d).cos();
        fallback = Some(ProjectionFallback::FlatEarth);
        debug!(lat, meters, lng_r, "geodesic longitude delta fell back to flat earth");
    }

    GeodesicFrame {
        point,
        top,
        lat2,
        lng_r,
        fallback,
    }
}

fn horizontal_delta(
    projection: &dyn Projection,
    frame: &GeodesicFrame,
    lng: f64,
) -> (f64, Option<ProjectionFallback>) {
    let edge = projection.project(LatLng::new(frame.lat2, lng - frame.lng_r));
    let pixels = frame.point.x - edge.x;
    if pixels.is_nan() {
        warn!(lat2 = frame.lat2, "geodesic radius collapsed, using 0");
        return (0.0, Some(ProjectionFallback::Collapsed));
    }
    (pixels, frame.fallback)
}

/// Pixel inner radius for a ring centered at `center`.
///
/// `inner_radius` is in meters on geodesic surfaces and in coordinate units on
/// planar ones. A non-positive radius always yields `0` (no cut-out).
#[must_use]
pub fn project_inner_radius(
    projection: &dyn Projection,
    center: LatLng,
    inner_radius: f64,
) -> ProjectedRadius {
    if inner_radius.is_nan() || inner_radius <= 0.0 {
        return ProjectedRadius::NONE;
    }

    match projection.surface() {
        Surface::Geodesic => {
            let frame = geodesic_frame(projection, center, inner_radius);
            let (pixels, fallback) = horizontal_delta(projection, &frame, center.lng);
            ProjectedRadius { pixels, fallback }
        }
        Surface::Planar => {
            let point = projection.project(center);
            let edge = projection.project(LatLng::new(center.lat, center.lng - inner_radius));
            let pixels = point.x - edge.x;
            if pixels.is_nan() {
                warn!("planar inner radius collapsed, using 0");
                return ProjectedRadius {
                    pixels: 0.0,
                    fallback: Some(ProjectionFallback::Collapsed),
                };
            }
            ProjectedRadius {
                pixels,
                fallback: None,
            }
        }
    }
}

/// Projects a geographic circle of `radius` meters (or planar units).
///
/// Geodesic surfaces yield separate horizontal and vertical radii because the
/// pixel scale differs per axis away from the equator.
#[must_use]
pub fn project_circle(projection: &dyn Projection, center: LatLng, radius: f64) -> ProjectedCircle {
    match projection.surface() {
        Surface::Geodesic => {
            let frame = geodesic_frame(projection, center, radius);
            let (pixels, fallback) = horizontal_delta(projection, &frame, center.lng);
            ProjectedCircle {
                point: frame.point,
                radius: pixels,
                radius_y: Some(frame.point.y - frame.top.y),
                fallback,
            }
        }
        Surface::Planar => {
            let point = projection.project(center);
            let edge = projection.project(LatLng::new(center.lat, center.lng - radius));
            ProjectedCircle {
                point,
                radius: point.x - edge.x,
                radius_y: None,
                fallback: None,
            }
        }
    }
}

/// Holds the inner radius computed for the latest redraw.
///
/// Center or zoom changes invalidate the value; call [`Self::recompute`] on
/// every redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InnerRadiusProjector {
    last: Option<ProjectedRadius>,
}

impl InnerRadiusProjector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recompute(
        &mut self,
        projection: &dyn Projection,
        center: LatLng,
        inner_radius: f64,
    ) -> f64 {
        let projected = project_inner_radius(projection, center, inner_radius);
        self.last = Some(projected);
        projected.pixels
    }

    #[must_use]
    pub fn last(&self) -> Option<ProjectedRadius> {
        self.last
    }

    #[must_use]
    pub fn last_pixels(&self) -> f64 {
        self.last.map_or(0.0, |projected| projected.pixels)
    }
}
