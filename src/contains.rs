//! Classifying how one shape encloses another.

use serde::{Deserialize, Serialize};

/// How much of an inner shape lies within an enclosing shape.
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, Ord, PartialOrd,
)]
pub enum Containment {
    /// No part of the inner shape lies within the enclosing shape.
    #[default]
    None,
    /// Some, but not all, of the inner shape lies within the enclosing shape.
    Partial,
    /// The inner shape lies entirely within the enclosing shape.
    Full,
}

impl Containment {
    /// Returns true when fully contained.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Returns true if there is at least partial containment.
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, Self::Full | Self::Partial)
    }

    /// Returns true if there is no containment at all.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Classifies how this shape encloses another shape.
///
/// For rectangles, [`Containment::Full`] follows the strict-containment rule
/// of [`Rect::contains`](crate::rect::Rect::contains): a shape touching the
/// enclosing boundary is at most [`Containment::Partial`].
pub trait Contains<T> {
    /// Returns a [`Containment`] indicating how `other` is enclosed within this shape.
    fn contains(&self, other: &T) -> Containment;

    /// Returns true if `other` is fully enclosed in this shape.
    #[inline]
    fn encloses(&self, other: &T) -> bool {
        self.contains(other).is_full()
    }
}
