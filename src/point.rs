//! Points in the [Cartesian plane](https://en.wikipedia.org/wiki/Cartesian_coordinate_system).

use crate::distance::Value;

/// A type with planar `(x, y)` coordinates.
pub trait Planar {
    /// The type of individual coordinates.
    type Value: Value;

    /// Get the x coordinate.
    fn x(&self) -> Self::Value;

    /// Get the y coordinate.
    fn y(&self) -> Self::Value;

    /// Copy this point's coordinates into a [Point].
    fn to_point(&self) -> Point<Self::Value> {
        Point::new(self.x(), self.y())
    }
}

/// A point in the plane.
///
/// Points have no identity beyond their coordinates: two coincident points are
/// indistinguishable, and lie at distance zero from each other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Value> Planar for Point<T> {
    type Value = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

/// [Planar] implementation for pairs.
impl<T: Value> Planar for (T, T) {
    type Value = T;

    fn x(&self) -> T {
        self.0
    }

    fn y(&self) -> T {
        self.1
    }
}

/// [Planar] implementation for arrays.
impl<T: Value> Planar for [T; 2] {
    type Value = T;

    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }
}

/// Blanket [Planar] implementation for references.
impl<P: ?Sized + Planar> Planar for &P {
    type Value = P::Value;

    fn x(&self) -> Self::Value {
        (*self).x()
    }

    fn y(&self) -> Self::Value {
        (*self).y()
    }
}
