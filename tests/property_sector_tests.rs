use proptest::prelude::*;
use semicircle_rs::core::{AngleRange, Point, compute_sector, contains_point, rotated};
use semicircle_rs::extensions::{DatasetEntry, PieLayoutOptions, layout_chart};
use semicircle_rs::render::{EMPTY_PATH, RasterCommand, synthesize_raster_commands, synthesize_vector_path};

proptest! {
    #[test]
    fn canonical_order_ignores_argument_order(
        a in -720.0f64..720.0,
        b in -720.0f64..720.0
    ) {
        let forward = AngleRange::new(a, b);
        let backward = AngleRange::new(b, a);
        prop_assert_eq!(forward.canonical_start(), backward.canonical_start());
        prop_assert_eq!(forward.canonical_stop(), backward.canonical_stop());
        prop_assert!(forward.canonical_start() <= forward.canonical_stop());
    }

    #[test]
    fn rotated_round_trip_returns_to_origin(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        angle in -10.0f64..10.0,
        radius in 0.0f64..500.0
    ) {
        let origin = Point::new(x, y);
        let back = rotated(rotated(origin, angle, radius), angle + std::f64::consts::PI, radius);
        prop_assert!((back.x - origin.x).abs() <= 1e-9);
        prop_assert!((back.y - origin.y).abs() <= 1e-9);
    }

    #[test]
    fn partition_is_contiguous_and_closes_the_circle(
        raw in prop::collection::vec(0.0f64..1_000.0, 1..24),
        bump in 0.001f64..10.0
    ) {
        let mut dataset: Vec<DatasetEntry> = raw.into_iter().map(DatasetEntry::new).collect();
        dataset.push(DatasetEntry::new(bump));
        let layout = layout_chart(Point::new(0.0, 0.0), &dataset, 50.0, &PieLayoutOptions::default())
            .expect("layout");

        prop_assert_eq!(layout.len(), dataset.len());
        prop_assert_eq!(layout.slices[0].sector.angles.start_angle, 0.0);
        for pair in layout.slices.windows(2) {
            prop_assert_eq!(pair[0].sector.angles.stop_angle, pair[1].sector.angles.start_angle);
        }
        let last = layout.slices.last().expect("last slice");
        prop_assert!((last.sector.angles.stop_angle - 360.0).abs() <= 1e-9);
    }

    #[test]
    fn every_interior_point_belongs_to_exactly_one_slice(
        raw in prop::collection::vec(1.0f64..100.0, 2..8),
        angle in -3.1f64..3.1,
        fraction in 0.05f64..0.95
    ) {
        let dataset: Vec<DatasetEntry> = raw.into_iter().map(DatasetEntry::new).collect();
        let center = Point::new(0.0, 0.0);
        let layout = layout_chart(center, &dataset, 100.0, &PieLayoutOptions::default())
            .expect("layout");
        let point = rotated(center, angle, 100.0 * fraction);

        let owners = layout
            .slices
            .iter()
            .filter(|slice| contains_point(&slice.sector, point, 0.0))
            .count();
        prop_assert_eq!(owners, 1);
    }

    #[test]
    fn zero_span_vector_path_is_always_empty(
        angle in 0.5f64..720.0,
        radius in 1.0f64..500.0,
        inner in 0.0f64..400.0
    ) {
        let sector = compute_sector(Point::new(10.0, 10.0), radius, None, inner, angle, angle);
        prop_assert_eq!(synthesize_vector_path(&sector), EMPTY_PATH);
    }

    #[test]
    fn raster_scale_is_always_scoped(
        radius in 1.0f64..500.0,
        radius_y in 1.0f64..500.0,
        inner in 0.0f64..400.0,
        start in 0.0f64..360.0,
        stop in 0.0f64..360.0
    ) {
        let sector = compute_sector(Point::new(50.0, 50.0), radius, Some(radius_y), inner, start, stop);
        let commands = synthesize_raster_commands(&sector);
        let saves = commands.iter().filter(|c| matches!(c, RasterCommand::Save)).count();
        let restores = commands.iter().filter(|c| matches!(c, RasterCommand::Restore)).count();

        prop_assert_eq!(saves, restores);
        prop_assert_eq!(commands.last(), Some(&RasterCommand::FillStroke));
    }
}
