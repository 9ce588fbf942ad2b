//! The sides of an axis-aligned rectangle.

use array_map::Indexable;
use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// An enumeration of the sides of an axis-aligned rectangle.
///
/// Sides are named in the y-down grid convention:
/// [`Side::Top`] is the side with the smallest y-coordinate,
/// and [`Side::Bottom`] is the side with the largest y-coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[repr(u8)]
#[derive(Indexable)]
pub enum Side {
    /// The left side.
    Left,
    /// The bottom side.
    Bottom,
    /// The right side.
    Right,
    /// The top side.
    Top,
}

impl Side {
    /// All four sides.
    pub const ALL: [Side; 4] = [Side::Left, Side::Bottom, Side::Right, Side::Top];

    /// Gets the direction of the coordinate corresponding to this side.
    ///
    /// Top and bottom edges are y-coordinates, so they are on the **vertical** axis.
    /// Left and right edges are x-coordinates, so they are on the **horizontal** axis.
    ///
    /// Also see [`Side::edge_dir`].
    pub const fn coord_dir(&self) -> Dir {
        use Dir::*;
        use Side::*;
        match self {
            Top | Bottom => Vert,
            Left | Right => Horiz,
        }
    }

    /// Gets the direction of the edge corresponding to this side.
    ///
    /// Top and bottom edges are **horizontal** line segments;
    /// left and right edges are **vertical** line segments.
    ///
    /// Also see [`Side::coord_dir`].
    pub const fn edge_dir(&self) -> Dir {
        use Dir::*;
        use Side::*;
        match self {
            Top | Bottom => Horiz,
            Left | Right => Vert,
        }
    }

    /// Returns the opposite side.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// assert_eq!(Side::Top.opposite(), Side::Bottom);
    /// assert_eq!(Side::Left.opposite(), Side::Right);
    /// ```
    pub const fn opposite(&self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;
    /// Returns the opposite side.
    fn not(self) -> Self::Output {
        self.opposite()
    }
}
