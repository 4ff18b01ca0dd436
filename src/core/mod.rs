pub mod angle;
pub mod geometry;
pub mod projection;
pub mod radius;
pub mod sector;
pub mod types;

pub use angle::{
    AngleRange, DEFAULT_DIRECTION_SPAN, DEFAULT_STOP_ANGLE, direction, to_radians,
};
pub use geometry::{contains_point, hit_test, large_arc_flag, normalize_angle, rotated};
pub use projection::{PlanarProjection, Projection, SphericalMercator, Surface};
pub use radius::{
    EARTH_RADIUS_METERS, InnerRadiusProjector, ProjectedCircle, ProjectedRadius,
    ProjectionFallback, project_circle, project_inner_radius,
};
pub use sector::{Sector, compute_sector, effective_inner_radius};
pub use types::{LatLng, Point, Viewport};
