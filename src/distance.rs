//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) in the plane.

use crate::point::Planar;

use num_traits::{AsPrimitive, Num, NumAssign, Signed};

use std::fmt::Debug;

/// A number type suitable for coordinates.
///
/// This trait is automatically implemented for all types that support the required operations,
/// which includes every signed integer type as well as `f32` and `f64`.
pub trait Value: Copy + Debug + Num + NumAssign + Signed + PartialOrd + AsPrimitive<f64> {}

/// Blanket [Value] implementation.
impl<T> Value for T where
    T: Copy + Debug + Num + NumAssign + Signed + PartialOrd + AsPrimitive<f64>
{
}

/// Check whether a coordinate is a finite number.
///
/// `NaN` and the infinities are the only values for which `x - x` is not zero.
pub(crate) fn is_finite<T: Value>(value: T) -> bool {
    value - value == T::zero()
}

/// The signed difference `a - b`, computed in `f64`.
///
/// Converting first means integer coordinates can never overflow, whatever their spread.
#[inline]
pub(crate) fn gap<T: Value>(a: T, b: T) -> f64 {
    a.as_() - b.as_()
}

/// A distance between two points.
pub trait Distance: Copy + PartialOrd {
    /// Get the real numerical value of this distance.
    fn value(self) -> f64;
}

/// A [Euclidean distance].
///
/// Distances are computed in `f64` with [`f64::hypot`], which never squares its inputs, so any
/// two points whose true distance is representable get a finite result.
///
///     # use closest_pair::distance::{Distance, EuclideanDistance};
///     let a = EuclideanDistance::new(3.0);
///     let b = EuclideanDistance::new(4.0);
///     assert!(a < b);
///     assert_eq!(a.min(b).value(), 3.0);
///
/// [Euclidean distance]: https://en.wikipedia.org/wiki/Euclidean_distance
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct EuclideanDistance(f64);

impl EuclideanDistance {
    /// Wrap a distance value.
    pub fn new(value: f64) -> Self {
        debug_assert!(value >= 0.0);
        Self(value)
    }

    /// The distance between two coincident points.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Check whether a one-dimensional gap is strictly shorter than this distance.
    ///
    /// A pair of points is never closer than the gap between them along either axis, so a gap
    /// this test rejects can't lead to a closer pair.
    #[inline]
    pub fn admits(self, gap: f64) -> bool {
        gap.abs() < self.0
    }

    /// Get the smaller of two distances.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl Distance for EuclideanDistance {
    #[inline]
    fn value(self) -> f64 {
        self.0
    }
}

impl From<EuclideanDistance> for f64 {
    fn from(distance: EuclideanDistance) -> f64 {
        distance.0
    }
}

/// Get the smaller of two optional distances, where `None` means "no pair".
pub(crate) fn closer(
    a: Option<EuclideanDistance>,
    b: Option<EuclideanDistance>,
) -> Option<EuclideanDistance> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Compute the Euclidean distance between two points.
///
/// ```math
/// \begin{aligned}
/// \mathrm{euclidean\_distance}(p, q) &= \|p - q\|_2 \\
/// &= \sqrt{(p_x - q_x)^2 + (p_y - q_y)^2}
/// \end{aligned}
/// ```
#[inline]
pub fn euclidean_distance<P, Q>(p: P, q: Q) -> EuclideanDistance
where
    P: Planar,
    Q: Planar<Value = P::Value>,
{
    let dx = gap(p.x(), q.x());
    let dy = gap(p.y(), q.y());
    EuclideanDistance(dx.hypot(dy))
}
