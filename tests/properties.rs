//! Property tests for the closest pair search.

use closest_pair::{brute_force, closest_pair, ClosestPair, Distance, Error, Method};

use proptest::prelude::*;

/// Integer coordinates, small enough that shifted and scaled copies stay exact in `f64`.
fn coord() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

fn points(min: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((coord(), coord()), min..120)
}

/// Points on a small grid, so ties and duplicates are common.
fn crowded_points() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..6, 0i64..6), 2..60)
}

fn method() -> impl Strategy<Value = Method> {
    prop_oneof![Just(Method::Presorted), Just(Method::Resort)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn matches_brute_force(points in points(2), method in method()) {
        let expected = brute_force(&points).unwrap();
        let actual = ClosestPair::new().method(method).solve(&points).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn matches_brute_force_crowded(points in crowded_points(), method in method()) {
        let expected = brute_force(&points).unwrap();
        let actual = ClosestPair::new().method(method).solve(&points).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn matches_brute_force_floats(
        points in prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 2..120),
        method in method(),
    ) {
        let expected = brute_force(&points).unwrap();
        let actual = ClosestPair::new().method(method).solve(&points).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn matches_brute_force_wide(
        points in prop::collection::vec(any::<(i32, i32)>(), 2..120),
        method in method(),
    ) {
        let expected = brute_force(&points).unwrap();
        let actual = ClosestPair::new().method(method).solve(&points).unwrap();
        prop_assert!(actual.value().is_finite());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn matches_brute_force_huge_floats(
        points in prop::collection::vec((-1.0e300f64..1.0e300, -1.0e300f64..1.0e300), 2..60),
        method in method(),
    ) {
        let expected = brute_force(&points).unwrap();
        let actual = ClosestPair::new().method(method).solve(&points).unwrap();
        prop_assert!(actual.value().is_finite());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn order_independent(points in points(2).prop_shuffle()) {
        let mut sorted = points.clone();
        sorted.sort();
        prop_assert_eq!(closest_pair(&points).unwrap(), closest_pair(&sorted).unwrap());
    }

    #[test]
    fn duplicate_is_zero(mut points in points(1), index in any::<prop::sample::Index>()) {
        let duplicate = points[index.index(points.len())];
        points.push(duplicate);
        prop_assert_eq!(closest_pair(&points).unwrap(), 0.0);
    }

    #[test]
    fn scaling(points in points(2), k in 1i64..1_000) {
        let scaled: Vec<_> = points.iter().map(|&(x, y)| (k * x, k * y)).collect();
        let d = ClosestPair::new().solve(&points).unwrap();
        let ds = ClosestPair::new().solve(&scaled).unwrap();
        let expected = k as f64 * d.value();
        prop_assert!((ds.value() - expected).abs() <= 1e-12 * expected);
    }

    #[test]
    fn translation(points in points(2), dx in coord(), dy in coord()) {
        let moved: Vec<_> = points.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
        prop_assert_eq!(
            ClosestPair::new().solve(&moved).unwrap(),
            ClosestPair::new().solve(&points).unwrap(),
        );
    }

    #[test]
    fn degenerate_inputs_fail(points in prop::collection::vec((coord(), coord()), 0..2)) {
        prop_assert_eq!(closest_pair(&points), Err(Error::TooFewPoints { len: points.len() }));
    }
}
