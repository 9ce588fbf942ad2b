//! Axis-aligned rectangles on the integer grid.

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use array_map::ArrayMap;
use serde::{Deserialize, Serialize};

use crate::contains::{Containment, Contains};
use crate::corner::Corner;
use crate::edge::Edge;
use crate::intersect::Intersect;
use crate::point::Point;
use crate::side::Side;

/// An axis-aligned rectangle, specified by its top-left corner and extents.
///
/// `(x, y)` is the top-left corner in this crate's grid convention
/// (origin at the top left, y increasing downward); the bottom-right corner
/// is `(x + width, y + height)`.
///
/// The four corner [`Point`]s and four boundary [`Edge`]s are derived once at
/// construction and cached for the lifetime of the rectangle. Since no field
/// is ever mutated, the cached geometry is always consistent with the scalar
/// fields.
///
/// Extents are not validated: zero or negative `width`/`height` are accepted
/// structurally, and the corner and edge geometry follows the same
/// arithmetic. Callers that want a conventional rectangle must supply
/// non-negative extents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RawRect", into = "RawRect")]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    x: i64,
    /// The y-coordinate of the top-left corner.
    y: i64,
    /// The horizontal extent.
    width: i64,
    /// The vertical extent.
    height: i64,
    /// Cached corner points, keyed by [`Corner`].
    corners: ArrayMap<Corner, Point, 4>,
    /// Cached boundary edges, keyed by [`Side`].
    edges: ArrayMap<Side, Edge, 4>,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and extents.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(0, 0, 5, 5);
    /// assert_eq!(rect.corner(Corner::TopLeft), Point::new(0, 0));
    /// assert_eq!(rect.corner(Corner::BottomRight), Point::new(5, 5));
    /// ```
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        let top_left = Point::new(x, y);
        let top_right = Point::new(x + width, y);
        let bottom_left = Point::new(x, y + height);
        let bottom_right = Point::new(x + width, y + height);

        Self {
            x,
            y,
            width,
            height,
            // IMPORTANT: the ordering of array elements here must match
            // the ordering of variants in the [`Corner`] enum.
            corners: ArrayMap::new([top_left, top_right, bottom_left, bottom_right]),
            // IMPORTANT: the ordering of array elements here must match
            // the ordering of variants in the [`Side`] enum.
            edges: ArrayMap::new([
                Edge::new(top_left, bottom_left),
                Edge::new(bottom_left, bottom_right),
                Edge::new(top_right, bottom_right),
                Edge::new(top_left, top_right),
            ]),
        }
    }

    /// Creates a rectangle from its four bounds (left, top, right, bottom).
    ///
    /// Callers are expected to supply `left <= right` and `top <= bottom`;
    /// inverted bounds produce a rectangle with negative extents, which this
    /// type accepts structurally.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::from_bounds(15, 20, 30, 40);
    /// assert_eq!(rect, Rect::new(15, 20, 15, 20));
    /// ```
    #[inline]
    pub const fn from_bounds(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Creates a zero-area rectangle containing the given point.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::from_point(Point::new(25, 60));
    /// assert_eq!(rect.left(), 25);
    /// assert_eq!(rect.right(), 25);
    /// assert_eq!(rect.top(), 60);
    /// assert_eq!(rect.bottom(), 60);
    /// ```
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, 0, 0)
    }

    /// Returns the x-coordinate of the top-left corner.
    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Returns the y-coordinate of the top-left corner.
    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the horizontal extent of the rectangle.
    #[inline]
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Returns the vertical extent of the rectangle.
    #[inline]
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// Returns the left x-coordinate of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(10, 20, 20, 20);
    /// assert_eq!(rect.left(), 10);
    /// ```
    #[inline]
    pub const fn left(&self) -> i64 {
        self.x
    }

    /// Returns the top y-coordinate of the rectangle.
    ///
    /// In the y-down grid convention, this is the smaller of the two
    /// y-bounds for a rectangle with positive height.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(10, 20, 20, 20);
    /// assert_eq!(rect.top(), 20);
    /// ```
    #[inline]
    pub const fn top(&self) -> i64 {
        self.y
    }

    /// Returns the right x-coordinate of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(10, 20, 20, 20);
    /// assert_eq!(rect.right(), 30);
    /// ```
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x + self.width
    }

    /// Returns the bottom y-coordinate of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(10, 20, 20, 20);
    /// assert_eq!(rect.bottom(), 40);
    /// ```
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Returns the area of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(10, 20, 20, 30);
    /// assert_eq!(rect.area(), 600);
    /// ```
    #[inline]
    pub const fn area(&self) -> i64 {
        self.width * self.height
    }

    /// Returns the center point of the rectangle.
    ///
    /// Note that the center point will be rounded to integer coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(0, 0, 200, 100);
    /// assert_eq!(rect.center(), Point::new(100, 50));
    /// ```
    pub const fn center(&self) -> Point {
        Point::new(
            (self.left() + self.right()) / 2,
            (self.top() + self.bottom()) / 2,
        )
    }

    /// Returns the desired corner of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(20, 20, 80, 180);
    /// assert_eq!(rect.corner(Corner::TopLeft), Point::new(20, 20));
    /// assert_eq!(rect.corner(Corner::TopRight), Point::new(100, 20));
    /// assert_eq!(rect.corner(Corner::BottomLeft), Point::new(20, 200));
    /// assert_eq!(rect.corner(Corner::BottomRight), Point::new(100, 200));
    /// ```
    #[inline]
    pub fn corner(&self, corner: Corner) -> Point {
        self.corners[corner]
    }

    /// Returns the four corners of the rectangle, in the order
    /// top-left, top-right, bottom-left, bottom-right.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(0, 0, 5, 5);
    /// assert_eq!(rect.corners(), [
    ///     Point::new(0, 0),
    ///     Point::new(5, 0),
    ///     Point::new(0, 5),
    ///     Point::new(5, 5),
    /// ]);
    /// ```
    pub fn corners(&self) -> [Point; 4] {
        [
            self.corner(Corner::TopLeft),
            self.corner(Corner::TopRight),
            self.corner(Corner::BottomLeft),
            self.corner(Corner::BottomRight),
        ]
    }

    /// Returns the desired edge of the rectangle.
    ///
    /// Horizontal edges run from their left endpoint to their right endpoint;
    /// vertical edges run from their top endpoint to their bottom endpoint.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(0, 0, 5, 5);
    /// assert_eq!(rect.edge(Side::Top), Edge::new(Point::new(0, 0), Point::new(5, 0)));
    /// assert_eq!(rect.edge(Side::Left), Edge::new(Point::new(0, 0), Point::new(0, 5)));
    /// ```
    #[inline]
    pub fn edge(&self, side: Side) -> Edge {
        self.edges[side]
    }

    /// The top edge: `(x, y) --> (x + width, y)`.
    #[inline]
    pub fn top_edge(&self) -> Edge {
        self.edge(Side::Top)
    }

    /// The bottom edge: `(x, y + height) --> (x + width, y + height)`.
    #[inline]
    pub fn bottom_edge(&self) -> Edge {
        self.edge(Side::Bottom)
    }

    /// The left edge: `(x, y) --> (x, y + height)`.
    #[inline]
    pub fn left_edge(&self) -> Edge {
        self.edge(Side::Left)
    }

    /// The right edge: `(x + width, y) --> (x + width, y + height)`.
    #[inline]
    pub fn right_edge(&self) -> Edge {
        self.edge(Side::Right)
    }

    /// Returns true if the point lies on any of this rectangle's four edges.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(0, 0, 5, 5);
    /// assert!(rect.boundary_contains(Point::new(0, 3)));
    /// assert!(rect.boundary_contains(Point::new(5, 5)));
    /// assert!(!rect.boundary_contains(Point::new(2, 2)));
    /// assert!(!rect.boundary_contains(Point::new(6, 3)));
    /// ```
    pub fn boundary_contains(&self, p: Point) -> bool {
        Side::ALL
            .into_iter()
            .any(|side| self.edge(side).contains_point(p))
    }

    /// Returns true if this rectangle strictly contains `other`.
    ///
    /// Containment is strict on all four bounds: a rectangle that shares any
    /// boundary line with `other` does **not** contain it, even if `other`
    /// lies within its closed bounds. This distinguishes "contains" from
    /// "touches".
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let outer = Rect::new(0, 0, 10, 10);
    /// assert!(outer.contains(&Rect::new(3, 3, 3, 3)));
    /// ```
    ///
    /// Sharing a boundary is not containment:
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let outer = Rect::new(0, 0, 10, 10);
    /// assert!(!outer.contains(&Rect::new(0, 0, 5, 5)));
    /// assert!(!outer.contains(&outer));
    /// ```
    pub fn contains(&self, other: &Rect) -> bool {
        self.left() < other.left()
            && self.top() < other.top()
            && self.right() > other.right()
            && self.bottom() > other.bottom()
    }

    /// Returns true if this rectangle and `other` are adjacent.
    ///
    /// Two rectangles are adjacent when exactly one pair of *opposite* sides
    /// touches or overlaps along its span, and the rectangles neither
    /// strictly contain one another nor are identical.
    ///
    /// Each of this rectangle's sides is compared against the other
    /// rectangle's opposite side (top against bottom, left against right, and
    /// so on): same-side pairs can only coincide in configurations that are
    /// containment or disjointness, never true adjacency. If two or more
    /// opposite-side pairs coincide at once, one rectangle is nested against
    /// a corner of the other rather than cleanly beside it, and the
    /// rectangles are judged not adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Rect::new(0, 0, 5, 5);
    /// let b = Rect::new(0, 5, 5, 1);
    /// assert!(a.is_adjacent(&b));
    /// assert!(b.is_adjacent(&a));
    /// ```
    ///
    /// Overlapping rectangles are not adjacent:
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Rect::new(0, 0, 5, 5);
    /// let b = Rect::new(2, 2, 5, 5);
    /// assert!(!a.is_adjacent(&b));
    /// ```
    pub fn is_adjacent(&self, other: &Rect) -> bool {
        // A contained or identical rectangle touches on more than one side,
        // which is never true adjacency.
        if self.contains(other) || self == other {
            return false;
        }

        let matches = Side::ALL
            .into_iter()
            .filter(|&side| self.edge(side).contains_edge(other.edge(side.opposite())))
            .count();

        matches == 1
    }

    /// Computes the rectangular overlap of this rectangle with `other`.
    ///
    /// Returns `None` if the two rectangles have no geometric overlap.
    /// Rectangles that merely touch along an edge or corner have a
    /// zero-extent overlap, which is still `Some(_)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Rect::new(0, 0, 5, 5);
    /// let b = Rect::new(2, 2, 5, 5);
    /// assert_eq!(a.overlap(&b), Some(Rect::new(2, 2, 3, 3)));
    ///
    /// let c = Rect::new(10, 10, 5, 5);
    /// assert_eq!(a.overlap(&c), None);
    /// ```
    pub fn overlap(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left > right || top > bottom {
            return None;
        }

        Some(Rect::from_bounds(left, top, right, bottom))
    }

    /// Returns the discrete points at which the boundaries of this rectangle
    /// and `other` cross.
    ///
    /// This models intersection as a set of meeting points, not as the area
    /// of overlap: the result is the corners of the overlap region that lie
    /// on *both* rectangles' boundaries, reported in the fixed order
    /// top-left, top-right, bottom-left, bottom-right (qualifying points
    /// only, relative order preserved).
    ///
    /// Adjacent rectangles (see [`Rect::is_adjacent`]) report no intersection
    /// points: pure edge-touching does not count as an intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Rect::new(0, 0, 5, 5);
    /// let b = Rect::new(2, 2, 5, 5);
    /// assert_eq!(a.intersection(&b), vec![Point::new(5, 2), Point::new(2, 5)]);
    /// ```
    ///
    /// A strictly contained rectangle produces no crossing points:
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Rect::new(0, 0, 10, 10);
    /// let b = Rect::new(3, 3, 3, 3);
    /// assert!(a.intersection(&b).is_empty());
    /// ```
    pub fn intersection(&self, other: &Rect) -> Vec<Point> {
        // Edge-adjacency is touching, not crossing.
        if self.is_adjacent(other) {
            return Vec::new();
        }

        let Some(overlap) = self.overlap(other) else {
            return Vec::new();
        };

        overlap
            .corners()
            .into_iter()
            .filter(|&p| self.boundary_contains(p) && other.boundary_contains(p))
            .collect()
    }

    /// Computes the rectangular union of this rectangle with `other`:
    /// the smallest rectangle covering both.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let a = Rect::new(0, 0, 100, 200);
    /// let b = Rect::new(-50, 20, 170, 140);
    /// assert_eq!(a.union(b), Rect::new(-50, 0, 170, 200));
    /// ```
    pub fn union(self, other: Self) -> Self {
        Self::from_bounds(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

impl PartialEq for Rect {
    /// Two rectangles are equal iff all four scalar fields match.
    ///
    /// The cached corners and edges are a function of the scalar fields, so
    /// they are excluded from the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    /// Hashes the four scalar fields, consistent with [`PartialEq`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl Display for Rect {
    /// Displays the rectangle as `[x=..,y=..,width=..,height=..]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let rect = Rect::new(0, 0, 5, 5);
    /// assert_eq!(rect.to_string(), "[x=0,y=0,width=5,height=5]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x={},y={},width={},height={}]",
            self.x, self.y, self.width, self.height
        )
    }
}

impl Intersect<Rect> for Rect {
    type Output = Self;

    fn intersect(&self, other: &Rect) -> Option<Self::Output> {
        self.overlap(other)
    }
}

impl Contains<Point> for Rect {
    /// Classifies a point against this rectangle's closed bounds.
    ///
    /// Points strictly inside are [`Containment::Full`]; points on the
    /// boundary are [`Containment::Partial`]; everything else is
    /// [`Containment::None`].
    fn contains(&self, other: &Point) -> Containment {
        let inside_closed = other.x >= self.left()
            && other.x <= self.right()
            && other.y >= self.top()
            && other.y <= self.bottom();
        if !inside_closed {
            Containment::None
        } else if self.boundary_contains(*other) {
            Containment::Partial
        } else {
            Containment::Full
        }
    }
}

impl Contains<Rect> for Rect {
    /// Classifies another rectangle against this one.
    ///
    /// [`Containment::Full`] follows the strict rule of [`Rect::contains`];
    /// any other configuration with a nonempty overlap (including
    /// boundary-sharing enclosure) is [`Containment::Partial`].
    fn contains(&self, other: &Rect) -> Containment {
        if self.contains(other) {
            Containment::Full
        } else if self.overlap(other).is_some() {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}

/// The serialized form of [`Rect`]: the four scalar fields only.
///
/// Deserialization rebuilds the cached corner and edge geometry, keeping the
/// consistency invariant across round-trips.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename = "Rect")]
struct RawRect {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl From<RawRect> for Rect {
    fn from(value: RawRect) -> Self {
        Self::new(value.x, value.y, value.width, value.height)
    }
}

impl From<Rect> for RawRect {
    fn from(value: Rect) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn overlapping_rects_cross_at_two_points() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(2, 2, 5, 5);

        assert_eq!(a.intersection(&b), vec![Point::new(5, 2), Point::new(2, 5)]);
        assert_eq!(b.intersection(&a), vec![Point::new(5, 2), Point::new(2, 5)]);
        assert!(!a.contains(&b));
        assert!(!b.contains(&a));
        assert!(!a.is_adjacent(&b));
    }

    #[test]
    fn contained_rect_has_no_crossing_points() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(3, 3, 3, 3);

        assert!(a.contains(&b));
        assert!(!b.contains(&a));
        assert!(!a.is_adjacent(&b));
        assert!(a.intersection(&b).is_empty());
        assert!(b.intersection(&a).is_empty());
    }

    #[test]
    fn side_sharing_rects_are_adjacent_symmetrically() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(0, 5, 5, 1);

        assert!(a.is_adjacent(&b));
        assert!(b.is_adjacent(&a));
        assert!(a.intersection(&b).is_empty());
        assert!(b.intersection(&a).is_empty());

        let right_neighbor = Rect::new(5, 0, 5, 5);
        assert!(a.is_adjacent(&right_neighbor));
        assert!(right_neighbor.is_adjacent(&a));
    }

    #[test]
    fn identity_properties() {
        let a = Rect::new(0, 0, 5, 5);

        assert_eq!(a, a);
        assert!(!a.contains(&a));
        assert!(!a.is_adjacent(&a));
        // Identical rectangles are not adjacent, their overlap is themselves,
        // and all four overlap corners lie on both boundaries.
        assert_eq!(a.intersection(&a), a.corners().to_vec());
    }

    #[test]
    fn contains_is_strict() {
        let outer = Rect::new(0, 0, 10, 10);

        // Sharing the top-left corner (or any boundary line) defeats
        // containment even though the rectangle lies within closed bounds.
        assert!(!outer.contains(&Rect::new(0, 0, 5, 5)));
        assert!(!outer.contains(&Rect::new(2, 0, 5, 5)));
        assert!(!outer.contains(&Rect::new(5, 5, 5, 5)));
        assert!(outer.contains(&Rect::new(1, 1, 8, 8)));
    }

    #[test]
    fn corner_nested_rects_are_not_adjacent() {
        let a = Rect::new(0, 0, 10, 10);

        // A degenerate rectangle sitting on a's top-left corner matches two
        // opposite-side pairs at once (top/bottom and left/right), which the
        // exactly-one rule rejects.
        let corner_point = Rect::new(0, 0, 0, 0);
        assert!(!a.is_adjacent(&corner_point));

        // Corner-to-corner touching matches no side pair at all.
        let diagonal = Rect::new(10, 10, 3, 3);
        assert!(!a.is_adjacent(&diagonal));
        assert!(!diagonal.is_adjacent(&a));
    }

    #[test]
    fn collinear_degenerate_rects_are_not_adjacent() {
        // Both zero-height rectangles lie on the same line, so the top and
        // bottom pairs match simultaneously.
        let a = Rect::new(0, 0, 5, 0);
        let b = Rect::new(1, 0, 3, 0);
        assert!(!a.is_adjacent(&b));
    }

    #[test]
    fn intersection_points_lie_on_both_boundaries() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(2, 2, 5, 5);
        let points = a.intersection(&b);
        assert!(!points.is_empty());
        for p in points {
            assert!(a.boundary_contains(p));
            assert!(b.boundary_contains(p));
        }
    }

    #[test]
    fn cross_shaped_overlap_has_four_crossing_points() {
        // A wide rectangle crossed by a tall one: every corner of the overlap
        // lies on one boundary of each input.
        let horiz = Rect::new(0, 3, 9, 3);
        let vert = Rect::new(3, 0, 3, 9);
        let points = horiz.intersection(&vert);
        assert_eq!(
            points,
            vec![
                Point::new(3, 3),
                Point::new(6, 3),
                Point::new(3, 6),
                Point::new(6, 6),
            ]
        );
    }

    #[test]
    fn overlap_of_disjoint_rects_is_none() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 0, 5, 5);
        assert_eq!(a.overlap(&b), None);
        assert_eq!(a.intersect(&b), None);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn containment_classification() {
        let outer = Rect::new(0, 0, 10, 10);

        assert_eq!(
            Contains::<Rect>::contains(&outer, &Rect::new(3, 3, 3, 3)),
            Containment::Full
        );
        // Boundary-sharing enclosure is only partial under the strict rule.
        assert_eq!(
            Contains::<Rect>::contains(&outer, &Rect::new(0, 0, 5, 5)),
            Containment::Partial
        );
        assert_eq!(
            Contains::<Rect>::contains(&outer, &Rect::new(20, 20, 5, 5)),
            Containment::None
        );

        assert_eq!(
            Contains::<Point>::contains(&outer, &Point::new(5, 5)),
            Containment::Full
        );
        assert_eq!(
            Contains::<Point>::contains(&outer, &Point::new(0, 5)),
            Containment::Partial
        );
        assert_eq!(
            Contains::<Point>::contains(&outer, &Point::new(-1, 5)),
            Containment::None
        );
        assert!(outer.encloses(&Point::new(5, 5)));
    }

    #[test]
    fn degenerate_extents_flow_through_the_arithmetic() {
        let inverted = Rect::new(0, 0, -5, 5);
        assert_eq!(inverted.right(), -5);
        assert_eq!(inverted.corner(Corner::BottomRight), Point::new(-5, 5));
        assert_eq!(inverted.area(), -25);

        let line = Rect::new(2, 2, 6, 0);
        assert_eq!(line.top_edge(), line.bottom_edge());
        assert!(line.boundary_contains(Point::new(4, 2)));
    }

    #[test]
    fn union_covers_both_rects() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(7, -2, 2, 4);
        assert_eq!(a.union(b), Rect::new(0, -2, 9, 7));
        assert_eq!(a.union(b), b.union(a));
        assert_eq!(a.bounding_union(&b), a.union(b));
    }

    #[test]
    fn display_forms() {
        let rect = Rect::new(0, 0, 5, 5);
        assert_eq!(rect.to_string(), "[x=0,y=0,width=5,height=5]");
        assert_eq!(rect.top_edge().to_string(), "[(0,0)-->(5,0)]");
        assert_eq!(rect.corner(Corner::BottomRight).to_string(), "(5,5)");
    }
}
