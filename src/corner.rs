//! Describes the corners of axis-aligned rectangles.
//!
//! # Examples
//!
//! You can access the corners of a [`Rect`](crate::rect::Rect):
//!
//! ```
//! # use gridrect::prelude::*;
//! let rect = Rect::new(10, 20, 20, 20);
//! assert_eq!(rect.corner(Corner::BottomRight), Point::new(30, 40));
//! ```

use array_map::Indexable;
use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::side::Side;

/// An enumeration of the corners of an axis-aligned rectangle.
///
/// Variants are declared in the order corners are reported by
/// [`Rect::corners`](crate::rect::Rect::corners):
/// top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[repr(u8)]
#[derive(Indexable)]
pub enum Corner {
    /// The top-left corner.
    TopLeft,
    /// The top-right corner.
    TopRight,
    /// The bottom-left corner.
    BottomLeft,
    /// The bottom-right corner.
    BottomRight,
}

impl Corner {
    /// All four corners, in reporting order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Gets the [`Side`] corresponding to the given [`Dir`] for this corner.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridrect::prelude::*;
    /// assert_eq!(Corner::TopLeft.side(Dir::Horiz), Side::Left);
    /// assert_eq!(Corner::TopLeft.side(Dir::Vert), Side::Top);
    /// assert_eq!(Corner::BottomRight.side(Dir::Horiz), Side::Right);
    /// assert_eq!(Corner::BottomRight.side(Dir::Vert), Side::Bottom);
    /// ```
    pub const fn side(&self, dir: Dir) -> Side {
        use Corner::*;
        use Dir::*;
        use Side::*;
        match dir {
            Horiz => match self {
                TopLeft | BottomLeft => Left,
                TopRight | BottomRight => Right,
            },
            Vert => match self {
                TopLeft | TopRight => Top,
                BottomLeft | BottomRight => Bottom,
            },
        }
    }
}
