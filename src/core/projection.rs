use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::angle::DEG_TO_RAD;
use crate::core::{LatLng, Point};

/// Earth radius used by the spherical Mercator projection, in meters.
pub const MERCATOR_EARTH_RADIUS_METERS: f64 = 6_378_137.0;

const MAX_LATITUDE: f64 = 85.051_128_779_8;
const TILE_SIZE_PX: f64 = 256.0;

/// Shape of the surface a projection maps from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// Curved earth: meters must be corrected per latitude.
    Geodesic,
    /// Flat coordinate space: radii are in coordinate units.
    Planar,
}

/// Map projection supplied by the host for the current center/zoom.
///
/// `project` returns layer pixels; `unproject` is its inverse.
pub trait Projection {
    fn project(&self, latlng: LatLng) -> Point;
    fn unproject(&self, point: Point) -> LatLng;
    fn surface(&self) -> Surface;
}

/// Web Mercator at a fixed zoom, shifted by `pixel_origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalMercator {
    pub zoom: f64,
    #[serde(default)]
    pub pixel_origin: Point,
}

impl SphericalMercator {
    #[must_use]
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom,
            pixel_origin: Point::default(),
        }
    }

    #[must_use]
    pub fn with_pixel_origin(mut self, pixel_origin: Point) -> Self {
        self.pixel_origin = pixel_origin;
        self
    }

    fn scale(self) -> f64 {
        TILE_SIZE_PX * 2f64.powf(self.zoom)
    }
}

impl Projection for SphericalMercator {
    fn project(&self, latlng: LatLng) -> Point {
        let k = 0.5 / (PI * MERCATOR_EARTH_RADIUS_METERS);
        let lat = latlng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let sin = (lat * DEG_TO_RAD).sin();
        let x = MERCATOR_EARTH_RADIUS_METERS * latlng.lng * DEG_TO_RAD;
        let y = MERCATOR_EARTH_RADIUS_METERS * ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
        let scale = self.scale();
        Point::new(scale * (k * x + 0.5), scale * (-k * y + 0.5)) - self.pixel_origin
    }

    fn unproject(&self, point: Point) -> LatLng {
        let k = 0.5 / (PI * MERCATOR_EARTH_RADIUS_METERS);
        let scale = self.scale();
        let absolute = point + self.pixel_origin;
        let x = (absolute.x / scale - 0.5) / k;
        let y = (absolute.y / scale - 0.5) / -k;
        LatLng::new(
            (2.0 * (y / MERCATOR_EARTH_RADIUS_METERS).exp().atan() - PI / 2.0) / DEG_TO_RAD,
            x / MERCATOR_EARTH_RADIUS_METERS / DEG_TO_RAD,
        )
    }

    fn surface(&self) -> Surface {
        Surface::Geodesic
    }
}

/// Flat projection: `x = lng * scale`, `y = -lat * scale`, shifted by `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarProjection {
    pub scale: f64,
    #[serde(default)]
    pub origin: Point,
}

impl PlanarProjection {
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            origin: Point::default(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

impl Projection for PlanarProjection {
    fn project(&self, latlng: LatLng) -> Point {
        Point::new(latlng.lng * self.scale, -latlng.lat * self.scale) - self.origin
    }

    fn unproject(&self, point: Point) -> LatLng {
        let absolute = point + self.origin;
        LatLng::new(-absolute.y / self.scale, absolute.x / self.scale)
    }

    fn surface(&self) -> Surface {
        Surface::Planar
    }
}
