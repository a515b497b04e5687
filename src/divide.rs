//! The divide-and-conquer recursion.
//!
//! Both dividers take a range of points ordered by `(x, y)`, split it at the middle element,
//! solve the halves, and then look for a closer pair in the strip around the dividing line.
//! Halves are sub-slices of the engine's backing array; nothing is copied per level except the
//! strip.

use crate::brute::brute_force_observed;
use crate::distance::{closer, gap, EuclideanDistance, Value};
use crate::point::Point;
use crate::stats::Observer;
use crate::strip::scan;
use crate::util::by_y;

use std::cmp::Ordering;

/// Ranges this small are solved by brute force.
const BASE_CASE_LEN: usize = 3;

/// Solve an x-ordered range, sorting each strip by y from scratch.
///
/// This is `$O(n \log^2 n)$`.  The input is only read.
pub(crate) fn solve_resort<T, O>(
    points: &[Point<T>],
    depth: usize,
    observer: &mut O,
) -> Option<EuclideanDistance>
where
    T: Value,
    O: Observer,
{
    if points.len() <= BASE_CASE_LEN {
        observer.base_case(points.len(), depth);
        return brute_force_observed(points, observer);
    }

    let mid = points.len() / 2;
    let mid_x = points[mid].x;
    let (left, right) = points.split_at(mid);

    let dl = solve_resort(left, depth + 1, observer);
    let dr = solve_resort(right, depth + 1, observer);
    let d = closer(dl, dr)?;

    let mut strip: Vec<_> = points
        .iter()
        .filter(|p| d.admits(gap(p.x, mid_x)))
        .copied()
        .collect();
    observer.strip_built(strip.len());

    strip.sort_by(by_y);
    Some(scan(&strip, d, observer))
}

/// Solve an x-ordered range, leaving it ordered by y.
///
/// Each level merges the y-ordered halves returned by its children, so strips come out of the
/// range already ordered and the whole search is `$O(n \log n)$`.  `scratch` is shared by every
/// level and must have room for the whole range to avoid reallocation.
pub(crate) fn solve_presorted<T, O>(
    points: &mut [Point<T>],
    scratch: &mut Vec<Point<T>>,
    depth: usize,
    observer: &mut O,
) -> Option<EuclideanDistance>
where
    T: Value,
    O: Observer,
{
    if points.len() <= BASE_CASE_LEN {
        observer.base_case(points.len(), depth);
        let d = brute_force_observed(points, observer);
        points.sort_by(by_y);
        return d;
    }

    let mid = points.len() / 2;
    // Captured before the children reorder their halves by y
    let mid_x = points[mid].x;
    let (left, right) = points.split_at_mut(mid);

    let dl = solve_presorted(left, scratch, depth + 1, observer);
    let dr = solve_presorted(right, scratch, depth + 1, observer);

    merge_by_y(points, mid, scratch);
    observer.merged(points.len());

    let d = closer(dl, dr)?;

    scratch.clear();
    scratch.extend(points.iter().filter(|p| d.admits(gap(p.x, mid_x))));
    observer.strip_built(scratch.len());

    Some(scan(&scratch[..], d, observer))
}

/// Merge the y-ordered runs `points[..mid]` and `points[mid..]` in place.
fn merge_by_y<T: Value>(points: &mut [Point<T>], mid: usize, scratch: &mut Vec<Point<T>>) {
    scratch.clear();
    scratch.extend_from_slice(&points[..mid]);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < scratch.len() && j < points.len() {
        if by_y(&points[j], &scratch[i]) == Ordering::Less {
            points[k] = points[j];
            j += 1;
        } else {
            points[k] = scratch[i];
            i += 1;
        }
        k += 1;
    }

    // Whatever remains of the right run is already in place
    let rest = &scratch[i..];
    points[k..k + rest.len()].copy_from_slice(rest);
}
