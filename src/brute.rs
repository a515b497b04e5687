//! Exhaustive closest pair search.

use crate::distance::{closer, euclidean_distance, EuclideanDistance};
use crate::point::Planar;
use crate::stats::Observer;

/// Find the minimum pairwise distance by comparing every unordered pair of points.
///
/// Returns `None` if fewer than two points are given, since no pair exists.  This takes
/// `$O(n^2)$` time; it is the base case of the divide-and-conquer search, and a reference to
/// test it against.
///
///     # use closest_pair::{brute_force, Distance};
///     let d = brute_force(&[(0, 0), (10, 0), (5, 1)]).unwrap();
///     assert!((d.value() - 26f64.sqrt()).abs() < 1e-12);
///     assert_eq!(brute_force::<(i32, i32)>(&[(0, 0)]), None);
pub fn brute_force<P: Planar>(points: &[P]) -> Option<EuclideanDistance> {
    brute_force_observed(points, &mut ())
}

/// [brute_force], reporting each distance computation to an [Observer].
pub(crate) fn brute_force_observed<P, O>(
    points: &[P],
    observer: &mut O,
) -> Option<EuclideanDistance>
where
    P: Planar,
    O: Observer,
{
    let mut best = None;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            observer.distance_evaluated();
            best = closer(best, Some(euclidean_distance(p, q)));
        }
    }
    best
}
