use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Default stop angle. Slightly below 360 so a literal full turn never flips
/// back into sector logic through float error.
pub const DEFAULT_STOP_ANGLE: f64 = 359.9999;

/// Span used by `AngleRange::with_direction` when none is given.
pub const DEFAULT_DIRECTION_SPAN: f64 = 10.0;

/// Converts north-up clockwise degrees into east-origin radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * DEG_TO_RAD
}

/// Midpoint between `start` and `stop`, in whatever unit they share.
#[must_use]
pub fn direction(start: f64, stop: f64) -> f64 {
    stop - (stop - start) / 2.0
}

/// Configured start/stop angles in degrees, clockwise from North.
///
/// Values are not wrapped into `[0, 360)`. Canonical accessors order the pair
/// first, so a range configured backwards is read as if swapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    #[serde(default)]
    pub start_angle: f64,
    #[serde(default = "default_stop_angle")]
    pub stop_angle: f64,
}

impl Default for AngleRange {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            stop_angle: DEFAULT_STOP_ANGLE,
        }
    }
}

impl AngleRange {
    #[must_use]
    pub const fn new(start_angle: f64, stop_angle: f64) -> Self {
        Self {
            start_angle,
            stop_angle,
        }
    }

    /// Range of `span` degrees centered on `direction`.
    #[must_use]
    pub fn with_direction(direction: f64, span: Option<f64>) -> Self {
        let mut range = Self::default();
        range.set_direction(direction, span.unwrap_or(DEFAULT_DIRECTION_SPAN));
        range
    }

    pub fn set_start_angle(&mut self, degrees: f64) {
        self.start_angle = degrees;
    }

    pub fn set_stop_angle(&mut self, degrees: f64) {
        self.stop_angle = degrees;
    }

    pub fn set_direction(&mut self, direction: f64, span: f64) {
        self.start_angle = direction - span / 2.0;
        self.stop_angle = direction + span / 2.0;
    }

    /// `(min, max)` of the configured pair, still in degrees.
    #[must_use]
    pub fn canonical_degrees(self) -> (f64, f64) {
        if self.start_angle < self.stop_angle {
            (self.start_angle, self.stop_angle)
        } else {
            (self.stop_angle, self.start_angle)
        }
    }

    #[must_use]
    pub fn canonical_start(self) -> f64 {
        to_radians(self.canonical_degrees().0)
    }

    #[must_use]
    pub fn canonical_stop(self) -> f64 {
        to_radians(self.canonical_degrees().1)
    }

    /// Facing direction of the canonical pair, in radians.
    #[must_use]
    pub fn direction(self) -> f64 {
        direction(self.canonical_start(), self.canonical_stop())
    }

    /// Facing direction of the configured pair, in degrees.
    #[must_use]
    pub fn direction_degrees(self) -> f64 {
        direction(self.start_angle, self.stop_angle)
    }

    #[must_use]
    pub fn span_degrees(self) -> f64 {
        let (start, stop) = self.canonical_degrees();
        stop - start
    }

    #[must_use]
    pub fn is_full_circle(self) -> bool {
        self.start_angle == 0.0 && self.stop_angle > 359.0
    }

    #[must_use]
    pub fn is_zero_span(self) -> bool {
        self.start_angle == self.stop_angle
    }

    #[must_use]
    pub fn is_sector(self) -> bool {
        !self.is_full_circle() && !self.is_zero_span()
    }

    pub(crate) fn is_finite(self) -> bool {
        self.start_angle.is_finite() && self.stop_angle.is_finite()
    }
}

fn default_stop_angle() -> f64 {
    DEFAULT_STOP_ANGLE
}
