//! Axis-aligned rectangular bounding boxes.

use impl_trait_for_tuples::impl_for_tuples;

use crate::edge::Edge;
use crate::point::Point;
use crate::rect::Rect;
use crate::union::BoundingUnion;

/// A geometric shape that has a bounding box.
///
/// # Examples
///
/// ```
/// # use gridrect::prelude::*;
/// let rect = Rect::new(0, 0, 100, 200);
/// assert_eq!(rect.bbox(), Some(Rect::new(0, 0, 100, 200)));
/// let point = Point::new(50, 70);
/// assert_eq!(point.bbox(), Some(Rect::new(50, 70, 0, 0)));
/// ```
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// If empty, this method should return `None`.
    /// Note that points and zero-area rectangles are not empty:
    /// these shapes contain a single point, and their bounding box
    /// implementations will return `Some(_)`.
    fn bbox(&self) -> Option<Rect>;
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Bbox for Point {
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::from_point(*self))
    }
}

impl Bbox for Edge {
    fn bbox(&self) -> Option<Rect> {
        let (s, e) = (self.start(), self.end());
        Some(Rect::from_bounds(
            s.x.min(e.x),
            s.y.min(e.y),
            s.x.max(e.x),
            s.y.max(e.y),
        ))
    }
}

impl<T> Bbox for &T
where
    T: Bbox,
{
    fn bbox(&self) -> Option<Rect> {
        T::bbox(*self)
    }
}

#[impl_for_tuples(32)]
impl Bbox for TupleIdentifier {
    #[allow(clippy::let_and_return)]
    fn bbox(&self) -> Option<Rect> {
        let mut bbox = None;
        for_tuples!( #( bbox = bbox.bounding_union(&TupleIdentifier.bbox()); )* );
        bbox
    }
}

impl<T: Bbox> Bbox for Vec<T> {
    fn bbox(&self) -> Option<Rect> {
        let mut bbox = None;
        for item in self {
            bbox = bbox.bounding_union(&item.bbox());
        }
        bbox
    }
}

impl Bbox for Option<Rect> {
    fn bbox(&self) -> Option<Rect> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn bbox_works_for_tuples() {
        let tuple = (Rect::new(0, 0, 100, 200), Rect::new(-50, 20, 140, 230));
        assert_eq!(tuple.bbox(), Some(Rect::new(-50, 0, 150, 250)));
    }

    #[test]
    fn bbox_works_for_vecs() {
        let v = vec![Rect::new(0, 0, 100, 200), Rect::new(-50, 20, 140, 230)];
        assert_eq!(v.bbox(), Some(Rect::new(-50, 0, 150, 250)));
    }

    #[test]
    fn bbox_works_for_intersection_points() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(2, 2, 5, 5);
        let points = a.intersection(&b);
        assert_eq!(points.bbox(), Some(Rect::new(2, 2, 3, 3)));
    }

    #[test]
    fn bbox_works_for_edges() {
        let edge = Edge::new(Point::new(5, 0), Point::new(5, 7));
        assert_eq!(edge.bbox(), Some(Rect::new(5, 0, 0, 7)));
    }
}
