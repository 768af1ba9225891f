use proptest::prelude::*;
use timeline_plugins::core::{DataPoint, PixelPoint, is_point_in_box};
use timeline_plugins::locator::{IdentityTransform, LocatorOptions, find_nearest};

proptest! {
    #[test]
    fn nearest_point_is_a_first_minimum(
        raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..64),
        px in -600.0f64..600.0,
        py in -600.0f64..600.0
    ) {
        let data: Vec<DataPoint> = raw.iter().map(|(x, y)| DataPoint::new(*x, *y)).collect();
        let pointer = PixelPoint::new(px, py);
        let nearest = find_nearest(&data, &IdentityTransform, pointer, LocatorOptions::default())
            .expect("non-empty finite data has a nearest point");

        let distances: Vec<f64> = data
            .iter()
            .map(|point| (point.x - px).hypot(point.y - py))
            .collect();
        for (index, distance) in distances.iter().enumerate() {
            prop_assert!(nearest.distance_px <= *distance);
            if index < nearest.index {
                prop_assert!(*distance > nearest.distance_px);
            }
        }
        prop_assert_eq!(nearest.distance_px, distances[nearest.index]);
    }

    #[test]
    fn point_in_box_matches_half_open_bounds(
        px in -100.0f64..100.0,
        py in -100.0f64..100.0,
        bx in -50.0f64..50.0,
        by in -50.0f64..50.0,
        bw in 0.0f64..80.0,
        bh in 0.0f64..80.0
    ) {
        let inside = is_point_in_box(px, py, bx, by, bw, bh);
        let expected = bx <= px && px < bx + bw && by <= py && py < by + bh;
        prop_assert_eq!(inside, expected);
        prop_assert!(!is_point_in_box(bx + bw, by, bx, by, bw, bh));
    }
}
