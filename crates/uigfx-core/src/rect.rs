//! Axis-aligned rectangle type.
//!
//! [`Rect`] stores its four edges as floats. It is the bounding box
//! produced when a transform maps a rectangle: a rotation turns the
//! input into an arbitrary quadrilateral, and the result is the
//! tightest axis-aligned box around it.
//!
//! # Coordinate System
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   (left,top) ┌──────────┐
//!   │              │          │
//!   │              └──────────┘ (right,bottom)
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use uigfx_core::{Offset, Rect};
//!
//! let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
//! assert_eq!(rect.corners()[0], Offset::new(10.0, 20.0));
//! assert_eq!(rect.to_string(), "Rect.fromLTRB(10.0, 20.0, 110.0, 70.0)");
//! ```

use crate::Offset;

/// A rectangle defined by its left, top, right and bottom edges.
///
/// `left <= right` and `top <= bottom` for a well-formed rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: f32,
    /// Y coordinate of the top edge
    pub top: f32,
    /// X coordinate of the right edge
    pub right: f32,
    /// Y coordinate of the bottom edge
    pub bottom: f32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a rectangle from its four edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the four corners: top-left, bottom-left, top-right, bottom-right.
    #[inline]
    pub const fn corners(&self) -> [Offset; 4] {
        [
            Offset::new(self.left, self.top),
            Offset::new(self.left, self.bottom),
            Offset::new(self.right, self.top),
            Offset::new(self.right, self.bottom),
        ]
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect.fromLTRB({:.1}, {:.1}, {:.1}, {:.1})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let c = r.corners();
        assert_eq!(c[0], Offset::new(1.0, 2.0));
        assert_eq!(c[1], Offset::new(1.0, 4.0));
        assert_eq!(c[2], Offset::new(3.0, 2.0));
        assert_eq!(c[3], Offset::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_display() {
        let r = Rect::new(-20.0, 0.0, 0.5, 20.0);
        assert_eq!(r.to_string(), "Rect.fromLTRB(-20.0, 0.0, 0.5, 20.0)");
        assert_eq!(Rect::default(), Rect::ZERO);
    }
}
