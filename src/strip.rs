//! Closest pairs that straddle a dividing line.
//!
//! After the two halves of a point set have been solved, any closer pair must have one point on
//! each side, and both points must lie within the current best distance `$d$` of the dividing
//! line.  That band is the *strip*.  Once the strip is ordered by y, each point only needs to be
//! compared with the following points whose y-gap is still below the best distance; a packing
//! argument bounds that run by a constant, so the scan is linear in the size of the strip.

use crate::distance::{euclidean_distance, gap, EuclideanDistance};
use crate::point::Planar;
use crate::stats::Observer;
use crate::util::by_y;

/// Find the closest pair in a strip, if it is closer than `d`.
///
/// The strip is sorted by y in place.  The result is never greater than `d`.
///
///     # use closest_pair::{strip_closest, Distance, EuclideanDistance};
///     let d = EuclideanDistance::new(4.0);
///     let mut strip = [(4, 0), (5, 0)];
///     assert_eq!(strip_closest(&mut strip, d).value(), 1.0);
pub fn strip_closest<P: Planar>(strip: &mut [P], d: EuclideanDistance) -> EuclideanDistance {
    strip.sort_by(by_y);
    scan(strip, d, &mut ())
}

/// Scan a strip that is already ordered by y.
pub(crate) fn scan<P, O>(strip: &[P], d: EuclideanDistance, observer: &mut O) -> EuclideanDistance
where
    P: Planar,
    O: Observer,
{
    let mut best = d;

    for (i, p) in strip.iter().enumerate() {
        for q in &strip[i + 1..] {
            if !best.admits(gap(q.y(), p.y())) {
                break;
            }
            observer.distance_evaluated();
            best = best.min(euclidean_distance(p, q));
        }
    }

    best
}
