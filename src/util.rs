//! Internal utilities.

use crate::point::Planar;

use std::cmp::Ordering;

/// A wrapper that converts a partial ordering into a total one by panicking.
///
/// The engine rejects non-finite coordinates before sorting, so the panic is unreachable from
/// the public API.
#[derive(Clone, Copy, Debug, PartialOrd)]
pub struct Ordered<T>(T);

impl<T> Ordered<T> {
    /// Wrap a value.
    pub fn new(item: T) -> Self {
        Self(item)
    }
}

#[allow(clippy::derive_ord_xor_partial_ord)]
impl<T: PartialOrd> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).expect("Comparison between unordered items")
    }
}

impl<T: PartialOrd> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for Ordered<T> {}

/// Lexicographic `(x, y)` order.
pub fn by_x<P: Planar>(a: &P, b: &P) -> Ordering {
    Ordered::new((a.x(), a.y())).cmp(&Ordered::new((b.x(), b.y())))
}

/// Order by y only.
pub fn by_y<P: Planar>(a: &P, b: &P) -> Ordering {
    Ordered::new(a.y()).cmp(&Ordered::new(b.y()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::point::Point;

    #[test]
    fn test_ordered() {
        let one = Ordered::new(1.0);
        let two = Ordered::new(2.0);

        assert_eq!(one.cmp(&one), Ordering::Equal);
        assert_eq!(one.cmp(&two), Ordering::Less);
        assert_eq!(two.cmp(&one), Ordering::Greater);
    }

    #[test]
    #[should_panic(expected = "Comparison between unordered items")]
    fn test_unordered() {
        let one = Ordered::new(1.0);
        let nan = Ordered::new(f64::NAN);

        let _ = one.cmp(&nan);
    }

    #[test]
    fn test_point_orders() {
        let mut points = vec![
            Point::new(2, 0),
            Point::new(1, 5),
            Point::new(1, -1),
            Point::new(0, 3),
        ];

        points.sort_by(by_x);
        assert_eq!(
            points,
            [Point::new(0, 3), Point::new(1, -1), Point::new(1, 5), Point::new(2, 0)],
        );

        points.sort_by(by_y);
        assert_eq!(
            points,
            [Point::new(1, -1), Point::new(2, 0), Point::new(0, 3), Point::new(1, 5)],
        );
    }
}
