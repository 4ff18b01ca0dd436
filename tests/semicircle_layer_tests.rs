use approx::assert_abs_diff_eq;
use semicircle_rs::api::{
    SectorLayer, SemiCircle, SemiCircleMarker, SemicircleOptions, build_layer_frame,
};
use semicircle_rs::core::{DEFAULT_STOP_ANGLE, LatLng, PlanarProjection, Point, SphericalMercator, Viewport};
use semicircle_rs::render::ShapeStrategy;

fn planar() -> PlanarProjection {
    PlanarProjection::new(1.0)
}

#[test]
fn marker_keeps_its_pixel_radius_and_ring_width() {
    let options = SemicircleOptions::new(0.0, 90.0).with_ring_width(10.0);
    let mut marker =
        SemiCircleMarker::new(LatLng::new(-100.0, 200.0), 30.0, options).expect("marker");

    let sector = marker.project(&planar());
    assert_eq!(sector.center, Point::new(200.0, 100.0));
    assert_eq!(sector.radius, 30.0);
    assert_eq!(sector.radius_y, None);
    assert_eq!(sector.inner_radius, 20.0);
    assert!(marker.is_ring());
    assert_eq!(marker.last_sector(), Some(sector));
}

#[test]
fn hit_testing_needs_a_projection_first() {
    let mut marker = SemiCircleMarker::new(
        LatLng::new(-100.0, 200.0),
        30.0,
        SemicircleOptions::new(0.0, 90.0),
    )
    .expect("marker");
    let inside = Point::new(210.0, 90.0);

    assert!(!marker.contains_point(inside));
    marker.project(&planar());
    assert!(marker.contains_point(inside));
    assert!(!marker.contains_point(Point::new(190.0, 110.0)));
    // Default weight 3 gives 1.5 px of slack beyond the outer radius.
    assert!(marker.contains_point(Point::new(231.0, 99.9)));
}

#[test]
fn direction_setter_replaces_both_angles() {
    let mut marker =
        SemiCircleMarker::new(LatLng::new(0.0, 0.0), 10.0, SemicircleOptions::default())
            .expect("marker");
    assert!(!marker.is_sector());

    marker.set_direction(90.0, None);
    assert_eq!(marker.options().angles.start_angle, 85.0);
    assert_eq!(marker.options().angles.stop_angle, 95.0);
    assert!(marker.is_sector());
    assert_abs_diff_eq!(marker.direction(), 0.0, epsilon = 1e-12);

    marker.set_start_angle(10.0);
    marker.set_stop_angle(20.0);
    assert_eq!(marker.options().angles.canonical_degrees(), (10.0, 20.0));
}

#[test]
fn strategy_follows_the_projected_shape() {
    let mut marker =
        SemiCircleMarker::new(LatLng::new(0.0, 0.0), 10.0, SemicircleOptions::default())
            .expect("marker");
    assert_eq!(marker.strategy(), None);
    marker.project(&planar());
    assert_eq!(marker.strategy(), Some(ShapeStrategy::BaseCircle));

    marker.options_mut().inner_radius = 4.0;
    marker.project(&planar());
    assert_eq!(marker.strategy(), Some(ShapeStrategy::Sector));
}

#[test]
fn geographic_semicircle_projects_both_radii() {
    let options = SemicircleOptions::new(0.0, 180.0).with_inner_radius(500.0);
    let mut layer = SemiCircle::new(LatLng::new(45.0, 7.0), 1_000.0, options).expect("layer");

    let sector = layer.project(&SphericalMercator::new(13.0));
    assert!(sector.radius > 0.0);
    assert!(sector.radius_y.is_some());
    let ratio = sector.inner_radius / sector.radius;
    assert!((ratio - 0.5).abs() < 0.005, "ratio {ratio}");
    assert_eq!(layer.inner_radius_projector().last_pixels(), sector.inner_radius);
}

#[test]
fn geographic_ring_width_is_in_meters() {
    let options = SemicircleOptions::default().with_ring_width(250.0);
    let mut layer = SemiCircle::new(LatLng::new(10.0, 10.0), 1_000.0, options).expect("layer");

    let sector = layer.project(&SphericalMercator::new(13.0));
    let ratio = sector.inner_radius / sector.radius;
    assert!((ratio - 0.75).abs() < 0.005, "ratio {ratio}");
    assert_eq!(ShapeStrategy::select(&sector), ShapeStrategy::Sector);
}

#[test]
fn zero_inner_radius_stays_zero_after_projection() {
    let mut layer = SemiCircle::new(LatLng::new(70.0, 20.0), 800.0, SemicircleOptions::default())
        .expect("layer");
    let sector = layer.project(&SphericalMercator::new(11.0));
    assert_eq!(sector.inner_radius, 0.0);
    assert!(!layer.is_ring());
}

#[test]
fn invalid_construction_is_rejected() {
    let center = LatLng::new(0.0, 0.0);
    assert!(SemiCircle::new(center, -1.0, SemicircleOptions::default()).is_err());
    assert!(SemiCircleMarker::new(center, f64::NAN, SemicircleOptions::default()).is_err());
    assert!(
        SemiCircle::new(
            center,
            10.0,
            SemicircleOptions::default().with_inner_radius(-3.0)
        )
        .is_err()
    );
    assert!(SemiCircle::new(LatLng::new(f64::NAN, 0.0), 10.0, SemicircleOptions::default()).is_err());
}

#[test]
fn options_deserialize_with_defaults() {
    let options: SemicircleOptions =
        serde_json::from_str(r#"{"start_angle": 10.0, "ring_width": 5.0}"#).expect("parse");
    assert_eq!(options.angles.start_angle, 10.0);
    assert_eq!(options.angles.stop_angle, DEFAULT_STOP_ANGLE);
    assert_eq!(options.inner_radius, 0.0);
    assert!(options.is_ring());

    let empty: SemicircleOptions = serde_json::from_str("{}").expect("parse empty");
    assert_eq!(empty, SemicircleOptions::default());
}

#[test]
fn layer_frame_collects_every_projected_layer() {
    let mut marker = SemiCircleMarker::new(
        LatLng::new(-50.0, 50.0),
        20.0,
        SemicircleOptions::new(0.0, 90.0),
    )
    .expect("marker");
    let mut circle = SemiCircle::new(LatLng::new(-50.0, 150.0), 30.0, SemicircleOptions::default())
        .expect("circle");

    let mut layers: [&mut dyn SectorLayer; 2] = [&mut marker, &mut circle];
    let frame = build_layer_frame(&planar(), Viewport::new(300, 200), &mut layers);

    assert_eq!(frame.sectors.len(), 2);
    assert_eq!(frame.sectors[1].sector.radius, 30.0);
    frame.validate().expect("valid frame");
}
