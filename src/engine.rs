//! The closest pair engine.

use crate::distance::{is_finite, Distance, EuclideanDistance};
use crate::divide::{solve_presorted, solve_resort};
use crate::error::Error;
use crate::point::Planar;
use crate::stats::Observer;
use crate::util::by_x;

use tracing::debug;

/// How strips are put in y order.
///
/// Both methods find exactly the same distance; they only differ in cost.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Method {
    /// Merge the halves by y as the recursion unwinds, in `$O(n \log n)$`.
    #[default]
    Presorted,
    /// Sort every strip by y from scratch, in `$O(n \log^2 n)$`.
    Resort,
}

/// Divide-and-conquer closest pair search.
///
///     # use closest_pair::{ClosestPair, Method};
///     # use closest_pair::distance::Distance;
///     let search = ClosestPair::new().method(Method::Resort);
///     let d = search.solve(&[(0, 0), (4, 0), (5, 0), (9, 0)]).unwrap();
///     assert_eq!(d.value(), 1.0);
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestPair {
    method: Method,
}

impl ClosestPair {
    /// Create a search with the default [Method].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method used to order strips.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Find the smallest distance between any two of the given points.
    ///
    /// Coincident points are at distance zero.  Fails if there are fewer than two points, or if
    /// any coordinate is not finite.
    pub fn solve<P: Planar>(&self, points: &[P]) -> Result<EuclideanDistance, Error> {
        self.solve_observed(points, &mut ())
    }

    /// [ClosestPair::solve], reporting the progress of the search to an [Observer].
    pub fn solve_observed<P, O>(
        &self,
        points: &[P],
        observer: &mut O,
    ) -> Result<EuclideanDistance, Error>
    where
        P: Planar,
        O: Observer,
    {
        let len = points.len();
        if len < 2 {
            return Err(Error::TooFewPoints { len });
        }

        if let Some(index) = points.iter().position(|p| !is_finite(p.x()) || !is_finite(p.y())) {
            return Err(Error::NonFinite { index });
        }

        let mut sorted: Vec<_> = points.iter().map(Planar::to_point).collect();
        sorted.sort_by(by_x);

        let best = match self.method {
            Method::Presorted => {
                let mut scratch = Vec::with_capacity(len);
                solve_presorted(&mut sorted, &mut scratch, 0, observer)
            }
            Method::Resort => solve_resort(&sorted, 0, observer),
        };

        // Unreachable with two or more points
        let best = best.ok_or(Error::TooFewPoints { len })?;

        debug!(points = len, method = ?self.method, distance = best.value(), "closest pair");
        Ok(best)
    }
}

/// Find the smallest distance between any two of the given points.
///
///     # use closest_pair::closest_pair;
///     assert_eq!(closest_pair(&[(0.0, 0.0), (3.0, 4.0)]).unwrap(), 5.0);
///     assert!(closest_pair(&[(0.0, 0.0)]).is_err());
pub fn closest_pair<P: Planar>(points: &[P]) -> Result<f64, Error> {
    ClosestPair::new().solve(points).map(Distance::value)
}
