//! 2-D points on the integer grid.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A point in two-dimensional space.
///
/// Coordinates follow the grid convention of this crate:
/// the origin is at the top left, x increases rightward,
/// and y increases downward.
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: i64,
    /// The y-coordinate of the point.
    pub y: i64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0, 0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns true if this point lies within the axis-aligned bounding box
    /// spanned by `a` and `b`, inclusive on all four sides.
    ///
    /// Note that this is a pure bounding-box membership test: it does not
    /// check that this point is collinear with `a` and `b`. On a diagonal
    /// segment it accepts any point of the segment's bounding rectangle, so
    /// callers that need an exact point-on-segment test must only use it with
    /// axis-aligned endpoints (as [`Edge`](crate::edge::Edge) does).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Point::new(0, 0);
    /// let b = Point::new(5, 0);
    /// assert!(Point::new(3, 0).is_between(a, b));
    /// assert!(Point::new(0, 0).is_between(a, b));
    /// assert!(!Point::new(6, 0).is_between(a, b));
    /// assert!(!Point::new(3, 1).is_between(a, b));
    /// ```
    ///
    /// The order of `a` and `b` does not matter:
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// assert!(Point::new(3, 0).is_between(Point::new(5, 0), Point::new(0, 0)));
    /// ```
    pub fn is_between(self, a: Point, b: Point) -> bool {
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        let x1 = a.x.max(b.x);
        let y1 = a.y.max(b.y);

        self.x >= x0 && self.x <= x1 && self.y >= y0 && self.y <= y1
    }
}

impl Display for Point {
    /// Displays the point as `(x,y)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// assert_eq!(Point::new(2, 3).to_string(), "(2,3)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<(i64, i64)> for Point {
    fn from(value: (i64, i64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn is_between_is_inclusive_on_endpoints() {
        let a = Point::new(2, 2);
        let b = Point::new(7, 2);
        assert!(a.is_between(a, b));
        assert!(b.is_between(a, b));
    }

    #[test]
    fn is_between_accepts_bounding_box_of_diagonal_endpoints() {
        // Documented limitation: the test is a bounding-box check, so points
        // off the diagonal but inside its bounding box are accepted.
        let a = Point::new(0, 0);
        let b = Point::new(4, 4);
        assert!(Point::new(4, 0).is_between(a, b));
        assert!(Point::new(1, 3).is_between(a, b));
        assert!(!Point::new(5, 2).is_between(a, b));
    }

    #[test]
    fn point_arithmetic_works() {
        let p = Point::new(1, 2) + Point::new(3, 4);
        assert_eq!(p, Point::new(4, 6));
        assert_eq!(p - Point::new(4, 6), Point::zero());
        assert_eq!(Point::from((5, -7)), Point::new(5, -7));
    }
}
