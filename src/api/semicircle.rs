use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    AngleRange, InnerRadiusProjector, LatLng, Point, Projection, Sector, contains_point,
    effective_inner_radius, project_circle,
};
use crate::error::{SectorError, SectorResult};
use crate::render::{Color, SectorPrimitive, ShapeStrategy};

/// Angle and ring configuration shared by both layer variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemicircleOptions {
    #[serde(flatten)]
    pub angles: AngleRange,
    /// Inner radius in the layer's radius unit; `0` draws a solid wedge.
    #[serde(default)]
    pub inner_radius: f64,
    /// When set, overrides `inner_radius` with `radius - ring_width`.
    #[serde(default)]
    pub ring_width: f64,
}

impl Default for SemicircleOptions {
    fn default() -> Self {
        Self {
            angles: AngleRange::default(),
            inner_radius: 0.0,
            ring_width: 0.0,
        }
    }
}

impl SemicircleOptions {
    #[must_use]
    pub fn new(start_angle: f64, stop_angle: f64) -> Self {
        Self {
            angles: AngleRange::new(start_angle, stop_angle),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_ring_width(mut self, ring_width: f64) -> Self {
        self.ring_width = ring_width;
        self
    }

    #[must_use]
    pub fn is_ring(&self) -> bool {
        self.inner_radius > 0.0 || self.ring_width > 0.0
    }

    #[must_use]
    pub fn is_sector(&self) -> bool {
        self.angles.is_sector()
    }

    pub fn validate(self) -> SectorResult<Self> {
        if !self.angles.start_angle.is_finite() || !self.angles.stop_angle.is_finite() {
            return Err(SectorError::InvalidData(
                "sector angles must be finite".to_owned(),
            ));
        }
        for (value, name) in [
            (self.inner_radius, "inner_radius"),
            (self.ring_width, "ring_width"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SectorError::InvalidData(format!(
                    "sector option `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Paint applied to a layer's outline and interior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: Color,
    pub fill: Color,
    /// Stroke width in pixels; half of it is the hit-test slack.
    pub weight: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0.2, 0.533, 1.0),
            fill: Color::rgba(0.2, 0.533, 1.0, 0.2),
            weight: 3.0,
        }
    }
}

impl PathStyle {
    #[must_use]
    pub fn click_tolerance(self) -> f64 {
        self.weight / 2.0
    }
}

/// Sector capability shared by the point-marker and geographic-circle layers.
///
/// Implementors resolve their own radii in `project`; everything else is
/// provided on top of the last projected [`Sector`].
pub trait SectorLayer {
    fn options(&self) -> &SemicircleOptions;
    fn options_mut(&mut self) -> &mut SemicircleOptions;
    fn style(&self) -> PathStyle;

    /// Recomputes pixel geometry for the current view. Call on every redraw.
    fn project(&mut self, projection: &dyn Projection) -> Sector;

    fn last_sector(&self) -> Option<Sector>;

    fn set_start_angle(&mut self, degrees: f64) {
        self.options_mut().angles.set_start_angle(degrees);
    }

    fn set_stop_angle(&mut self, degrees: f64) {
        self.options_mut().angles.set_stop_angle(degrees);
    }

    /// Points the sector at `direction` with a `span` (default 10) degree opening.
    fn set_direction(&mut self, direction: f64, span: Option<f64>) {
        self.options_mut().angles = AngleRange::with_direction(direction, span);
    }

    /// Facing direction in radians (east-origin).
    fn direction(&self) -> f64 {
        self.options().angles.direction()
    }

    fn is_sector(&self) -> bool {
        self.options().is_sector()
    }

    fn is_ring(&self) -> bool {
        self.options().is_ring()
    }

    fn strategy(&self) -> Option<ShapeStrategy> {
        self.last_sector().map(|sector| ShapeStrategy::select(&sector))
    }

    /// Hit test against the last projected geometry; `false` before any projection.
    fn contains_point(&self, point: Point) -> bool {
        self.last_sector().is_some_and(|sector| {
            contains_point(&sector, point, self.style().click_tolerance())
        })
    }

    fn to_primitive(&self) -> Option<SectorPrimitive> {
        let style = self.style();
        self.last_sector()
            .map(|sector| SectorPrimitive::new(sector, style.fill, style.stroke, style.weight))
    }
}

/// Sector whose radius is fixed in pixels regardless of zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiCircleMarker {
    center: LatLng,
    radius: f64,
    options: SemicircleOptions,
    style: PathStyle,
    last: Option<Sector>,
}

impl SemiCircleMarker {
    pub fn new(center: LatLng, radius: f64, options: SemicircleOptions) -> SectorResult<Self> {
        validate_radius(radius)?;
        Ok(Self {
            center: center.validate()?,
            radius,
            options: options.validate()?,
            style: PathStyle::default(),
            last: None,
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> SectorResult<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }
}

impl SectorLayer for SemiCircleMarker {
    fn options(&self) -> &SemicircleOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut SemicircleOptions {
        &mut self.options
    }

    fn style(&self) -> PathStyle {
        self.style
    }

    fn project(&mut self, projection: &dyn Projection) -> Sector {
        let inner_radius = effective_inner_radius(
            self.radius,
            self.options.inner_radius,
            self.options.ring_width,
        );
        let sector = Sector {
            center: projection.project(self.center),
            radius: self.radius,
            radius_y: None,
            inner_radius,
            angles: self.options.angles,
        };
        self.last = Some(sector);
        sector
    }

    fn last_sector(&self) -> Option<Sector> {
        self.last
    }
}

/// Sector whose radii are in meters, projected per redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiCircle {
    center: LatLng,
    radius: f64,
    options: SemicircleOptions,
    style: PathStyle,
    inner: InnerRadiusProjector,
    last: Option<Sector>,
}

impl SemiCircle {
    pub fn new(center: LatLng, radius: f64, options: SemicircleOptions) -> SectorResult<Self> {
        validate_radius(radius)?;
        Ok(Self {
            center: center.validate()?,
            radius,
            options: options.validate()?,
            style: PathStyle::default(),
            inner: InnerRadiusProjector::new(),
            last: None,
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn set_center(&mut self, center: LatLng) -> SectorResult<()> {
        self.center = center.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> SectorResult<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    #[must_use]
    pub fn inner_radius_projector(&self) -> &InnerRadiusProjector {
        &self.inner
    }
}

impl SectorLayer for SemiCircle {
    fn options(&self) -> &SemicircleOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut SemicircleOptions {
        &mut self.options
    }

    fn style(&self) -> PathStyle {
        self.style
    }

    fn project(&mut self, projection: &dyn Projection) -> Sector {
        let circle = project_circle(projection, self.center, self.radius);
        let inner_meters = effective_inner_radius(
            self.radius,
            self.options.inner_radius,
            self.options.ring_width,
        );
        let inner_radius = self.inner.recompute(projection, self.center, inner_meters);
        trace!(
            radius_px = circle.radius,
            inner_radius_px = inner_radius,
            "projected semicircle"
        );

        let sector = Sector {
            center: circle.point,
            radius: circle.radius,
            radius_y: circle.radius_y,
            inner_radius,
            angles: self.options.angles,
        };
        self.last = Some(sector);
        sector
    }

    fn last_sector(&self) -> Option<Sector> {
        self.last
    }
}

fn validate_radius(radius: f64) -> SectorResult<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(SectorError::InvalidData(
            "radius must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
