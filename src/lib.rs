//! [Closest pair of points] in the plane, by divide and conquer.
//!
//! The points are sorted by x once, then the set is split at its middle point, both halves are
//! solved recursively, and the two answers are combined by looking for a closer pair that
//! straddles the dividing line.  Only points in a narrow strip around that line need to be
//! considered, and each of them only needs to be compared with a constant number of neighbours
//! in y, giving `$O(n \log n)$` time overall.
//!
//!     use closest_pair::closest_pair;
//!
//!     let points = [(0, 0), (4, 0), (5, 0), (9, 0)];
//!     assert_eq!(closest_pair(&points).unwrap(), 1.0);
//!
//! [Closest pair of points]: https://en.wikipedia.org/wiki/Closest_pair_of_points_problem

pub mod brute;
pub mod distance;
pub mod engine;
pub mod error;
pub mod input;
pub mod point;
pub mod report;
pub mod stats;
pub mod strip;

mod divide;
mod util;

pub use brute::brute_force;
pub use distance::{euclidean_distance, Distance, EuclideanDistance};
pub use engine::{closest_pair, ClosestPair, Method};
pub use error::{Error, ParseError};
pub use point::{Planar, Point};
pub use stats::{Observer, Stats};
pub use strip::strip_closest;
