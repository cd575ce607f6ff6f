//! 2D point type.
//!
//! [`Offset`] is the point handed to `Matrix::map`, and the corner type
//! of [`crate::Rect`].
//!
//! # Usage
//!
//! ```rust
//! use uigfx_core::Offset;
//!
//! let p = Offset::new(10.0, 20.0);
//! assert_eq!(p.to_string(), "Offset(10.0, 20.0)");
//! ```

/// An immutable 2D floating-point offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Offset {
    /// The origin (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new offset.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Offset({:.1}, {:.1})", self.x, self.y)
    }
}
