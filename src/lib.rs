//! Relationships between axis-aligned rectangles on an integer grid.
//!
//! The grid origin `(0, 0)` is the top-left corner: x increases rightward
//! and y increases downward. A [`Rect`](crate::rect::Rect) is given by its
//! top-left corner and extents, and derives its corner
//! [`Point`](crate::point::Point)s and boundary [`Edge`](crate::edge::Edge)s
//! at construction.
//!
//! # Examples
//!
//! Create two rectangles and ask how they relate:
//!
//! ```
//! # use gridrect::prelude::*;
//! let a = Rect::new(0, 0, 5, 5);
//! let b = Rect::new(2, 2, 5, 5);
//!
//! assert!(!a.contains(&b));
//! assert!(!a.is_adjacent(&b));
//! assert_eq!(a.intersection(&b), vec![Point::new(5, 2), Point::new(2, 5)]);
//! ```
#![warn(missing_docs)]

pub mod bbox;
pub mod contains;
pub mod corner;
pub mod dir;
pub mod edge;
pub mod intersect;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod side;
pub mod union;
