//! The edges of rectangular geometry.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::point::Point;

/// An edge of a rectangle: a directed line segment between two [`Point`]s.
///
/// Within this crate, edges are always the sides of axis-aligned rectangles,
/// so their endpoints share exactly one coordinate. That invariant is assumed
/// by the containment tests below rather than enforced at construction;
/// [`Edge::dir`] lets callers probe it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Edge {
    /// The starting point of the edge.
    start: Point,
    /// The ending point of the edge.
    end: Point,
}

impl Edge {
    /// Create a new edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
    /// ```
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The starting point of the edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
    /// assert_eq!(edge.start(), Point::new(0, 0));
    /// ```
    pub const fn start(&self) -> Point {
        self.start
    }

    /// The ending point of the edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
    /// assert_eq!(edge.end(), Point::new(5, 0));
    /// ```
    pub const fn end(&self) -> Point {
        self.end
    }

    /// The direction this edge runs along, or [`None`] if the edge is not
    /// axis-aligned.
    ///
    /// A degenerate edge whose endpoints coincide reports [`Dir::Horiz`].
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
    /// assert_eq!(edge.dir(), Some(Dir::Horiz));
    /// let edge = Edge::new(Point::new(5, 0), Point::new(5, 5));
    /// assert_eq!(edge.dir(), Some(Dir::Vert));
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 5));
    /// assert_eq!(edge.dir(), None);
    /// ```
    pub const fn dir(&self) -> Option<Dir> {
        if self.start.y == self.end.y {
            Some(Dir::Horiz)
        } else if self.start.x == self.end.x {
            Some(Dir::Vert)
        } else {
            None
        }
    }

    /// Returns true if point `p` lies on this edge.
    ///
    /// Delegates to [`Point::is_between`], so this is exact only for
    /// axis-aligned edges; see the note there.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
    /// assert!(edge.contains_point(Point::new(2, 0)));
    /// assert!(edge.contains_point(Point::new(5, 0)));
    /// assert!(!edge.contains_point(Point::new(2, 1)));
    /// ```
    pub fn contains_point(&self, p: Point) -> bool {
        p.is_between(self.start, self.end)
    }

    /// Returns true if `other` is fully contained in (or equal to) this
    /// edge's span, i.e. both of its endpoints lie on this edge.
    ///
    /// This is only meaningful when both edges are collinear and
    /// axis-aligned, which holds for the opposite rectangle sides compared by
    /// [`Rect::is_adjacent`](crate::rect::Rect::is_adjacent). The
    /// precondition is not checked here.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 5), Point::new(5, 5));
    /// let sub = Edge::new(Point::new(1, 5), Point::new(4, 5));
    /// assert!(edge.contains_edge(sub));
    /// assert!(edge.contains_edge(edge));
    /// assert!(!sub.contains_edge(edge));
    /// ```
    pub fn contains_edge(&self, other: Edge) -> bool {
        self.contains_point(other.start()) && self.contains_point(other.end())
    }
}

impl Display for Edge {
    /// Displays the edge as `[start-->end]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
    /// assert_eq!(edge.to_string(), "[(0,0)-->(5,0)]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-->{}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn contains_point_on_vertical_edge() {
        let edge = Edge::new(Point::new(5, 0), Point::new(5, 5));
        assert!(edge.contains_point(Point::new(5, 0)));
        assert!(edge.contains_point(Point::new(5, 3)));
        assert!(edge.contains_point(Point::new(5, 5)));
        assert!(!edge.contains_point(Point::new(5, 6)));
        assert!(!edge.contains_point(Point::new(4, 3)));
    }

    #[test]
    fn contains_edge_rejects_partial_overlap() {
        let edge = Edge::new(Point::new(0, 0), Point::new(5, 0));
        let overhanging = Edge::new(Point::new(3, 0), Point::new(8, 0));
        assert!(!edge.contains_edge(overhanging));
        assert!(!overhanging.contains_edge(edge));
    }

    #[test]
    fn degenerate_edge_is_horizontal() {
        let edge = Edge::new(Point::new(2, 2), Point::new(2, 2));
        assert_eq!(edge.dir(), Some(Dir::Horiz));
        assert!(edge.contains_point(Point::new(2, 2)));
        assert!(!edge.contains_point(Point::new(2, 3)));
    }
}
