use serde::{Deserialize, Serialize};

use crate::core::angle::AngleRange;
use crate::core::geometry::{large_arc_flag, rotated};
use crate::core::Point;
use crate::error::{SectorError, SectorResult};

/// Fully resolved sector in pixel space, ready for path synthesis.
///
/// `inner_radius == 0` is a solid wedge, anything larger is a ring segment.
/// `radius_y` is only set for elliptical displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub center: Point,
    pub radius: f64,
    #[serde(default)]
    pub radius_y: Option<f64>,
    #[serde(default)]
    pub inner_radius: f64,
    #[serde(default)]
    pub angles: AngleRange,
}

/// Builds a [`Sector`] from raw pixel radii and configured degrees.
///
/// Negative or NaN inner radii collapse to `0` (no cut-out).
#[must_use]
pub fn compute_sector(
    center: Point,
    outer_radius: f64,
    outer_radius_y: Option<f64>,
    inner_radius: f64,
    start_angle: f64,
    stop_angle: f64,
) -> Sector {
    Sector {
        center,
        radius: outer_radius,
        radius_y: outer_radius_y,
        inner_radius: inner_radius.max(0.0),
        angles: AngleRange::new(start_angle, stop_angle),
    }
}

/// Inner radius implied by `ring_width`, or `inner_radius` when no width is set.
#[must_use]
pub fn effective_inner_radius(radius: f64, inner_radius: f64, ring_width: f64) -> f64 {
    if ring_width > 0.0 {
        (radius - ring_width).max(0.0)
    } else {
        inner_radius.max(0.0)
    }
}

impl Sector {
    #[must_use]
    pub fn canonical_start(&self) -> f64 {
        self.angles.canonical_start()
    }

    #[must_use]
    pub fn canonical_stop(&self) -> f64 {
        self.angles.canonical_stop()
    }

    #[must_use]
    pub fn is_full_sector(&self) -> bool {
        self.angles.is_full_circle()
    }

    #[must_use]
    pub fn is_sector(&self) -> bool {
        self.angles.is_sector()
    }

    #[must_use]
    pub fn is_ring(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// No drawable area: the outer radius is not a positive finite number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    #[must_use]
    pub fn radius_y_or_radius(&self) -> f64 {
        self.radius_y.unwrap_or(self.radius)
    }

    /// `radius_y / radius`; `1.0` for circular sectors.
    #[must_use]
    pub fn vertical_scale(&self) -> f64 {
        match self.radius_y {
            Some(radius_y) if self.radius != 0.0 => radius_y / self.radius,
            _ => 1.0,
        }
    }

    #[must_use]
    pub fn large_arc(&self) -> bool {
        let (start, stop) = self.angles.canonical_degrees();
        large_arc_flag(start, stop)
    }

    /// Point on the (possibly elliptical) boundary of `radius` at `angle`.
    ///
    /// The vertical component is scaled by [`Self::vertical_scale`] so vector
    /// paths land where the raster backend's scaled arc does.
    #[must_use]
    pub fn boundary_point(&self, angle: f64, radius: f64) -> Point {
        let offset = rotated(Point::default(), angle, radius);
        self.center + Point::new(offset.x, offset.y * self.vertical_scale())
    }

    #[must_use]
    pub fn outer_start(&self) -> Point {
        self.boundary_point(self.canonical_start(), self.radius)
    }

    #[must_use]
    pub fn outer_stop(&self) -> Point {
        self.boundary_point(self.canonical_stop(), self.radius)
    }

    #[must_use]
    pub fn inner_start(&self) -> Point {
        self.boundary_point(self.canonical_start(), self.inner_radius)
    }

    #[must_use]
    pub fn inner_stop(&self) -> Point {
        self.boundary_point(self.canonical_stop(), self.inner_radius)
    }

    /// Vertical radius of the inner boundary.
    #[must_use]
    pub fn inner_radius_y(&self) -> f64 {
        self.inner_radius * self.vertical_scale()
    }

    pub fn validate(&self) -> SectorResult<()> {
        if !self.center.is_finite() {
            return Err(SectorError::InvalidData(
                "sector center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SectorError::InvalidData(
                "sector radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(radius_y) = self.radius_y {
            if !radius_y.is_finite() || radius_y < 0.0 {
                return Err(SectorError::InvalidData(
                    "sector radius_y must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
            return Err(SectorError::InvalidData(
                "sector inner radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.angles.is_finite() {
            return Err(SectorError::InvalidData(
                "sector angles must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
