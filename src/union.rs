//! Bounding unions of geometric objects.

use crate::rect::Rect;

/// Trait for calculating the smallest rectangle covering this shape and `other`.
pub trait BoundingUnion<T> {
    /// The type of the output shape representing the union.
    type Output;
    /// Calculates the bounding union of this shape with `other`.
    fn bounding_union(&self, other: &T) -> Self::Output;
}

impl BoundingUnion<Rect> for Rect {
    type Output = Rect;
    fn bounding_union(&self, other: &Rect) -> Self::Output {
        self.union(*other)
    }
}

impl BoundingUnion<Option<Rect>> for Option<Rect> {
    type Output = Option<Rect>;
    /// Takes the union of two optional rectangles, treating [`None`] as empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// let r1 = Some(Rect::new(0, 0, 10, 10));
    /// let r2 = Some(Rect::new(5, 5, 10, 10));
    /// let empty: Option<Rect> = None;
    /// assert_eq!(r1.bounding_union(&r2), Some(Rect::new(0, 0, 15, 15)));
    /// assert_eq!(r1.bounding_union(&empty), r1);
    /// assert_eq!(empty.bounding_union(&r2), r2);
    /// ```
    fn bounding_union(&self, other: &Option<Rect>) -> Self::Output {
        match (self, other) {
            (Some(r1), Some(r2)) => Some(r1.union(*r2)),
            (Some(r), None) | (None, Some(r)) => Some(*r),
            (None, None) => None,
        }
    }
}
